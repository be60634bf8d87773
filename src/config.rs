//! Recorded key event files.
//!
//! A recording is a TOML file holding an optional `log_level` and a list of
//! browser key events:
//!
//! ```toml
//! log_level = "debug"
//!
//! [[event]]
//! code = "KeyA"
//! key = "A"
//! metaState = 1
//!
//! [[event]]
//! code = "NumpadDecimal"
//! key = "."
//! location = 3
//! ```
//!
//! `location` and `metaState` default to 0. `code` and `key` are required.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::platform::web::WebKeyEventData;

/// Errors produced while loading a recording.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid recording: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A parsed recording file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recording {
    /// `env_logger` filter applied when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default, rename = "event")]
    pub events: Vec<WebKeyEventData>,
}

impl Recording {
    /// Parses a recording from TOML text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses the recording at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let recording = Self::parse(&text)?;
        log::debug!(
            "config: loaded {} event(s) from {}",
            recording.events.len(),
            path.display()
        );
        Ok(recording)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
