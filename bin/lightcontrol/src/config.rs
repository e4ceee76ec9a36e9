use std::net::SocketAddr;
use std::path::PathBuf;

use crate::{Error, Result};

const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SETTINGS_PATH: &str = "lightcontrol.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `host:port` of the TCP bridge in front of the printer's serial port.
    pub printer_address: String,
    pub listen_address: SocketAddr,
    pub settings_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let printer_address =
            lookup("PRINTER_ADDRESS").ok_or(Error::MissingEnv("PRINTER_ADDRESS"))?;

        let listen_address: SocketAddr = lookup("LISTEN_ADDRESS")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDRESS.to_string())
            .parse()?;

        let settings_path = lookup("SETTINGS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));

        Ok(Config {
            printer_address,
            listen_address,
            settings_path,
        })
    }
}
