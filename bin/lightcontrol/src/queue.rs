use lightcontrol::{ErasedError, LineSender};
use log::{error, info};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Hands lines over to the printer writer task without blocking the
/// command path.
#[derive(Clone)]
pub struct PrinterQueue(UnboundedSender<String>);

impl LineSender for PrinterQueue {
    fn send_line(&mut self, line: &str) -> Result<(), ErasedError> {
        self.0.send(line.to_string())?;
        Ok(())
    }
}

pub fn printer_queue() -> (PrinterQueue, UnboundedReceiver<String>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (PrinterQueue(tx), rx)
}

/// Drains the queue into the printer until every `PrinterQueue` is gone.
/// A line that fails to go out is logged and dropped.
pub async fn write_lines(mut lines: UnboundedReceiver<String>, mut printer: printer::Client) {
    while let Some(line) = lines.recv().await {
        if let Err(err) = printer.send_line(&line).await {
            error!(
                "unable to send {line:?} to printer at {}: {err}",
                printer.address()
            );
        }
    }

    info!("printer queue closed");
}
