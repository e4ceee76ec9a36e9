use serde::Serialize;

use crate::Used;

/// JSON body returned for every light command. Each shape carries `ok`.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Response {
    /// The raw toggle command went out, state is a guess.
    Toggled {
        ok: bool,
        assumed_is_on: Option<bool>,
        used: Used,
    },
    Switched {
        ok: bool,
        is_on: bool,
        used: Used,
        sent: String,
    },
    Status {
        ok: bool,
        is_on: Option<bool>,
    },
    Failure {
        ok: bool,
        error: String,
    },
}

impl Response {
    pub fn toggled(assumed_is_on: Option<bool>) -> Self {
        Self::Toggled {
            ok: true,
            assumed_is_on,
            used: Used::Toggle,
        }
    }

    pub fn switched(is_on: bool, used: Used, sent: String) -> Self {
        Self::Switched {
            ok: true,
            is_on,
            used,
            sent,
        }
    }

    pub fn status(attempted: bool, is_on: Option<bool>) -> Self {
        Self::Status {
            ok: attempted,
            is_on,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            ok: false,
            error: error.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            Self::Toggled { ok, .. }
            | Self::Switched { ok, .. }
            | Self::Status { ok, .. }
            | Self::Failure { ok, .. } => *ok,
        }
    }
}
