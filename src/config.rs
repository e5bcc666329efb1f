use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::note::NoteLayout;
use crate::wrap::MIN_WRAP_WIDTH;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Invalid config format: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NoteworthyConfig {
    /// Where boards and the log file live.
    pub data_dir: Option<PathBuf>,
    pub max_line_width: Option<usize>,
    pub min_height: Option<usize>,
}

impl NoteworthyConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: NoteworthyConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Note layout with defaults filled in. Widths under two columns cannot
    /// hold a character and are raised.
    pub fn note_layout(&self) -> NoteLayout {
        let defaults = NoteLayout::default();
        NoteLayout {
            max_line_width: self
                .max_line_width
                .unwrap_or(defaults.max_line_width)
                .max(MIN_WRAP_WIDTH),
            min_height: self.min_height.unwrap_or(defaults.min_height),
        }
    }
}
