use crate::error::{BookError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for phonebook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BookConfig {
    /// Name of the file the book is saved to, relative to the data dir
    pub data_file: String,

    /// Default page size for `show_all` (one page when unset)
    pub page_size: Option<usize>,

    /// Load the saved book when the interactive session starts
    pub autoload: bool,

    /// Save a modified book when the interactive session ends
    pub autosave: bool,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            page_size: None,
            autoload: true,
            autosave: true,
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let config: BookConfig =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        Ok(config)
    }
}
