use lightcontrol::{CommandTranslator, FileSettings};
use lightcontrol_web::{printer_queue, router, write_lines, Config, ErasedError};

use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::Mutex;
use tokio::task;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<(), ErasedError> {
    pretty_env_logger::init_timed();

    info!("lightcontrol version {VERSION}");

    let config = Config::from_env()?;

    let settings = FileSettings::open(&config.settings_path)?;
    info!("settings at {}", settings.path().display());

    let (queue, lines) = printer_queue();
    let printer = printer::Client::new(config.printer_address.clone());
    info!("printer at {}", printer.address());

    let writer_handle = task::spawn(write_lines(lines, printer));

    let mut translator = CommandTranslator::new(settings, Some(queue));
    translator.start();
    let translator = Arc::new(Mutex::new(translator));

    let listener = TcpListener::bind(config.listen_address).await?;
    let app = router(translator);

    let web_handle = task::spawn(async move {
        info!("Listening http://{}", config.listen_address);
        axum::serve(listener, app).await
    });

    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = web_handle => result??,
        _ = writer_handle => error!("printer writer stopped"),
        _ = sigterm.recv() => info!("got SIGTERM, exiting..."),
    };

    Ok(())
}
