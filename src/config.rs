//! Optional local configuration from `ruffsight.toml`.
//!
//! Missing file or malformed content never fails a run; preferences fall
//! back to their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "ruffsight.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Colored terminal output.
    #[serde(default = "default_color")]
    pub color: bool,
    /// Default output format when no `--format` flag is given.
    #[serde(default = "default_format")]
    pub format: String,
    /// Popularity tables are cut off after this many rows; 0 means unlimited.
    #[serde(default)]
    pub max_rows: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            color: default_color(),
            format: default_format(),
            max_rows: 0,
        }
    }
}

fn default_color() -> bool {
    true
}

fn default_format() -> String {
    "terminal".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub preferences: Preferences,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `ruffsight.toml` from the working directory, if present.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        if let Ok(content) = fs::read_to_string(Path::new(CONFIG_FILE)) {
            config.parse_toml(&content);
        }
        config
    }

    /// Merges preferences from TOML content; malformed content is ignored.
    pub fn parse_toml(&mut self, content: &str) {
        if let Ok(parsed) = toml::from_str::<Config>(content) {
            self.preferences = parsed.preferences;
        }
    }
}
