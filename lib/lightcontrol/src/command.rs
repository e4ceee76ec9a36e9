use serde_json::Value;
use transport::{parse_pwm, Switch, Target};

use crate::{Error, Result};

/// A light command as it arrives on the simple-API surface:
/// `{"command": "toggle", "target": "on", "pwm": 128}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `target` is validated by the translator, not here.
    Toggle { target: String, pwm: Option<u8> },
    SetState { state: Switch, pwm: Option<u8> },
    QueryStatus,
}

impl Command {
    pub fn from_json(body: &Value) -> Result<Command> {
        let params = body.as_object().ok_or(Error::UnknownCommand)?;
        let name = params
            .get("command")
            .and_then(Value::as_str)
            .ok_or(Error::UnknownCommand)?;

        let pwm = parse_pwm(params.get("pwm"));

        match name {
            "toggle" => {
                let target = params
                    .get("target")
                    .map(stringify)
                    .unwrap_or_else(|| Target::Toggle.to_string());

                Ok(Command::Toggle { target, pwm })
            }
            "set_state" => {
                let state = params.get("state").map(stringify).unwrap_or_default();
                let state = state
                    .to_lowercase()
                    .parse::<Switch>()
                    .map_err(|_| Error::InvalidStateParameter)?;

                Ok(Command::SetState { state, pwm })
            }
            "query_status" => Ok(Command::QueryStatus),
            _ => Err(Error::UnknownCommand),
        }
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
