mod config;
mod error;
mod queue;
mod web_service;

pub use config::Config;
pub use error::Error;
pub use queue::{printer_queue, write_lines, PrinterQueue};
pub use web_service::router;

use std::sync::Arc;

use lightcontrol::{CommandTranslator, FileSettings};
use tokio::sync::Mutex;

pub type ErasedError = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;

pub type Translator = CommandTranslator<FileSettings, PrinterQueue>;
pub type SharedTranslator = Arc<Mutex<Translator>>;
