mod command;
mod error;
mod sender;
mod state;
mod template;
mod translator;

pub mod settings;

pub use command::Command;
pub use error::Error;
pub use sender::LineSender;
pub use settings::{FileSettings, MemorySettings, SettingKey, Settings};
pub use state::LightState;
pub use template::inject_pwm;
pub use translator::CommandTranslator;

pub type ErasedError = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
