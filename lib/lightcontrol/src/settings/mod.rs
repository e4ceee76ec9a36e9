mod error;
mod file;

pub use error::Error;
pub use file::FileSettings;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use str_derive::Str;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    GcodeOn,
    GcodeOff,
    GcodeToggle,
    StatusQuery,
    StatusParseToken,
}

impl SettingKey {
    pub const fn all() -> [SettingKey; 5] {
        [
            SettingKey::GcodeOn,
            SettingKey::GcodeOff,
            SettingKey::GcodeToggle,
            SettingKey::StatusQuery,
            SettingKey::StatusParseToken,
        ]
    }

    pub fn default_value(self) -> &'static str {
        match self {
            SettingKey::GcodeOn => "M355 S1",
            SettingKey::GcodeOff => "M355 S0",
            SettingKey::GcodeToggle
            | SettingKey::StatusQuery
            | SettingKey::StatusParseToken => "",
        }
    }
}

/// Named string values the translator reads its command templates from.
pub trait Settings {
    /// Returns the stored value or the key's default.
    fn get(&self, key: SettingKey) -> String;

    fn set(&mut self, key: SettingKey, value: String) -> Result<()>;

    /// Stores several values at once. Either all of them are kept or, on
    /// error, none are.
    fn set_all(&mut self, values: Vec<(SettingKey, String)>) -> Result<()> {
        for (key, value) in values {
            self.set(key, value)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemorySettings {
    values: HashMap<SettingKey, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: SettingKey, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }
}

impl Settings for MemorySettings {
    fn get(&self, key: SettingKey) -> String {
        self.values
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.default_value().to_string())
    }

    fn set(&mut self, key: SettingKey, value: String) -> Result<()> {
        self.values.insert(key, value);
        Ok(())
    }
}

/// Current value of every key, by name.
pub fn snapshot(settings: &impl Settings) -> BTreeMap<String, String> {
    SettingKey::all()
        .into_iter()
        .map(|key| (key.to_string(), settings.get(key)))
        .collect()
}

/// Applies a partial JSON update. Nothing is written unless every entry
/// names a known key with a string (or null, meaning default) value, and
/// the update is stored as a single batch.
pub fn apply_changes(settings: &mut impl Settings, changes: &Map<String, Value>) -> Result<()> {
    let mut parsed = Vec::with_capacity(changes.len());

    for (name, value) in changes {
        let key = name
            .parse::<SettingKey>()
            .map_err(|_| Error::UnknownKey(name.clone()))?;

        let value = match value {
            Value::String(s) => s.clone(),
            Value::Null => key.default_value().to_string(),
            _ => return Err(Error::InvalidValue(key)),
        };

        parsed.push((key, value));
    }

    settings.set_all(parsed)
}
