//! JSON file configuration adapter.
//!
//! Implements [`ConfigPort`] by reading a JSON document from disk.  Fields
//! absent from the file take their defaults; the result is validated
//! before it is returned.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::app::ports::ConfigPort;
use crate::config::SystemConfig;
use crate::error::ConfigError;

pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<SystemConfig, ConfigError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => {
                warn!("reading {}: {e}", self.path.display());
                ConfigError::IoError
            }
        })?;

        let config: SystemConfig = serde_json::from_str(&text).map_err(|e| {
            warn!("parsing {}: {e}", self.path.display());
            ConfigError::Corrupted
        })?;
        config.validate()?;

        debug!("loaded config from {}: {:?}", self.path.display(), config);
        Ok(config)
    }
}
