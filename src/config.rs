//! User configuration.
//!
//! Loaded from `<config dir>/tally/config.toml` when present. Every field
//! has a default; a missing file means defaults, and a malformed file is
//! reported and ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Maximum characters of the primary display projected by the view.
    pub display_width: usize,
    /// Show the key-binding hint line under the keypad.
    pub show_keymap_hint: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_width: 14,
            show_keymap_hint: true,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location when no
    /// override is given.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) => path,
                None => return Self::default(),
            },
        };
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => config,
                Err(err) => {
                    warn!(path = %path.display(), %err, "malformed config file, using defaults");
                    Self::default()
                }
            },
            Err(err) => {
                warn!(path = %path.display(), %err, "unreadable config file, using defaults");
                Self::default()
            }
        }
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tally").join("config.toml"))
}
