mod pwm;
pub use pwm::{parse_pwm, PWM_MAX};

mod response;
pub use response::Response;

use serde::{Deserialize, Serialize};
use str_derive::Str;

/// What a `toggle` request asks for.
#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Toggle,
    On,
    Off,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn is_on(self) -> bool {
        matches!(self, Switch::On)
    }
}

impl From<bool> for Switch {
    fn from(is_on: bool) -> Self {
        if is_on {
            Switch::On
        } else {
            Switch::Off
        }
    }
}

/// Which configured command produced the line that went out.
#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Used {
    On,
    Off,
    Toggle,
}

impl From<Switch> for Used {
    fn from(switch: Switch) -> Self {
        match switch {
            Switch::On => Used::On,
            Switch::Off => Used::Off,
        }
    }
}
