use std::fmt;

use super::SettingKey;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Json(serde_json::Error),
    UnknownKey(String),
    InvalidValue(SettingKey),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::UnknownKey(key) => write!(f, "unknown setting {key}"),
            Self::InvalidValue(key) => write!(f, "setting {key} must be a string"),
        }
    }
}

impl std::error::Error for Error {}
