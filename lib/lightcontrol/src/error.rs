use std::fmt;

/// Why a light command was refused. None of these abort the service; the
/// HTTP layer turns them into `{ok: false, error}` bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    BadTarget(String),
    UnknownState(String),
    InvalidStateParameter,
    UnknownCommand,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadTarget(_) => write!(f, "bad target"),
            Self::UnknownState(_) => write!(f, "unknown state"),
            Self::InvalidStateParameter => write!(f, "state must be 'on' or 'off'"),
            Self::UnknownCommand => write!(f, "unknown command"),
        }
    }
}

impl std::error::Error for Error {}
