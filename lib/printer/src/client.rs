mod error;
pub use error::Error;

use log::{debug, info, trace};
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::net::TcpStream;

/// Writes G-code lines to a printer exposed over TCP, e.g. a serial port
/// bridged with ser2net.
///
/// The connection is opened on first use. After a failed write it is
/// dropped and the next line opens a fresh one.
pub struct Client {
    address: String,
    stream: Option<BufWriter<TcpStream>>,
}

impl Client {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            stream: None,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    pub async fn send_line(&mut self, line: &str) -> Result<(), Error> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Err(Error::EmptyLine);
        }

        let mut stream = match self.stream.take() {
            Some(stream) => stream,
            None => self.connect().await?,
        };

        trace!("> {line}");

        match Self::write_line(&mut stream, line).await {
            Ok(()) => {
                self.stream = Some(stream);
                Ok(())
            }
            Err(err) => {
                debug!("dropping connection to {}", self.address);
                Err(err.into())
            }
        }
    }

    async fn connect(&self) -> std::io::Result<BufWriter<TcpStream>> {
        let stream = TcpStream::connect(&self.address).await?;
        stream.set_nodelay(true)?;

        info!("connected to printer at {}", self.address);

        Ok(BufWriter::new(stream))
    }

    async fn write_line(stream: &mut BufWriter<TcpStream>, line: &str) -> std::io::Result<()> {
        stream.write_all(line.as_bytes()).await?;
        stream.write_all(b"\n").await?;
        stream.flush().await
    }
}
