use std::path::Path;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::sender::SenderConfig;

pub const DEFAULT_CONFIG_PATH: &str = "~/.config/wakemup.yml";
pub const DEFAULT_TARGET: &str = "255.255.255.255";

/// With `#[serde(default)]`: a missing section stays None, `section:` with no body becomes `T::default()`.
pub fn deserialize_absent_or_null<'de, D, T: Default>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.or(Some(T::default())))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yml::Error,
    },
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Address used when the caller gives none. Validated at wake time like any input.
    #[serde(default)]
    pub target: Option<String>,

    #[serde(default, deserialize_with = "deserialize_absent_or_null")]
    pub sender: Option<SenderConfig>,
}

impl Config {
    pub fn from_yaml(s: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str(s)
    }

    /// Loads `path` after `~` expansion. A missing file is only an error when `required`.
    pub fn load(path: &str, required: bool) -> Result<Self, ConfigError> {
        let expanded = shellexpand::tilde(path);
        let file = Path::new(expanded.as_ref());

        let contents = match std::fs::read_to_string(file) {
            Ok(s) => s,
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("[config] no config at '{}', using defaults", expanded);
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Io { path: expanded.into_owned(), source }),
        };

        Self::from_yaml(&contents).map_err(|source| ConfigError::Parse { path: expanded.into_owned(), source })
    }

    pub fn target(&self) -> &str {
        self.target.as_deref().unwrap_or(DEFAULT_TARGET)
    }

    pub fn sender(&self) -> SenderConfig {
        self.sender.clone().unwrap_or_default()
    }
}
