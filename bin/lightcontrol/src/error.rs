use std::fmt;

use lightcontrol::settings;

#[derive(Debug)]
pub enum Error {
    Settings(settings::Error),
    MissingEnv(&'static str),
    InvalidAddress(std::net::AddrParseError),
}

impl From<settings::Error> for Error {
    fn from(err: settings::Error) -> Self {
        Self::Settings(err)
    }
}

impl From<std::net::AddrParseError> for Error {
    fn from(err: std::net::AddrParseError) -> Self {
        Self::InvalidAddress(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Settings(err) => write!(f, "settings error: {err}"),
            Self::MissingEnv(name) => write!(f, "set ENV variable {name}"),
            Self::InvalidAddress(err) => write!(f, "invalid listen address: {err}"),
        }
    }
}

impl std::error::Error for Error {}
