use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::{snapshot, MemorySettings, Result, SettingKey, Settings};

/// Settings kept in a JSON object on disk. The whole file is rewritten on
/// every change.
#[derive(Debug)]
pub struct FileSettings {
    path: PathBuf,
    values: MemorySettings,
}

impl FileSettings {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut values = MemorySettings::new();

        if !path.exists() {
            info!("{} does not exist, using default settings", path.display());
            return Ok(Self { path, values });
        }

        let contents = std::fs::read(&path)?;
        let stored: HashMap<String, String> = serde_json::from_slice(&contents)?;

        for (name, value) in stored {
            match name.parse::<SettingKey>() {
                Ok(key) => {
                    values.set(key, value)?;
                }
                Err(_) => warn!("ignoring unknown setting {name} in {}", path.display()),
            }
        }

        debug!("loaded settings from {}", path.display());

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        let contents = serde_json::to_vec_pretty(&snapshot(&self.values))?;
        std::fs::write(&self.path, contents)?;

        debug!("saved settings to {}", self.path.display());

        Ok(())
    }
}

impl Settings for FileSettings {
    fn get(&self, key: SettingKey) -> String {
        self.values.get(key)
    }

    fn set(&mut self, key: SettingKey, value: String) -> Result<()> {
        self.set_all(vec![(key, value)])
    }

    fn set_all(&mut self, values: Vec<(SettingKey, String)>) -> Result<()> {
        let previous = self.values.clone();

        values
            .into_iter()
            .try_for_each(|(key, value)| self.values.set(key, value))?;

        if let Err(err) = self.save() {
            self.values = previous;
            return Err(err);
        }

        Ok(())
    }
}
