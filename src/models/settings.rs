//! Progress Settings
//!
//! Configuration for the progress surface. The visibility policy replaces the
//! two near-duplicate page variants observed upstream (one always showed the
//! progress log, one gated it on run status) with a single renderer selected
//! by configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::AppResult;

/// When the progress log is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProgressVisibility {
    /// Render the progress log whenever the state has progress to show
    #[default]
    Always,
    /// Render the progress log only while a run is in progress
    GatedByStatus,
}

fn default_stop_delay_ms() -> u64 {
    1000
}

/// Settings for the progress surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressSettings {
    /// Progress log visibility policy
    pub visibility: ProgressVisibility,
    /// Delay between the terminal-node signal and the issued stop, in
    /// milliseconds. The contract value is 1000; tests shorten it.
    pub stop_delay_ms: u64,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            visibility: ProgressVisibility::default(),
            stop_delay_ms: default_stop_delay_ms(),
        }
    }
}

impl ProgressSettings {
    /// Load settings from a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: ProgressSettings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Try to load from `progress_settings.json` under the given directory,
    /// falling back to defaults when the file is missing or invalid.
    pub fn load_or_default(dir: impl AsRef<Path>) -> Self {
        let config_path = dir.as_ref().join("progress_settings.json");
        if config_path.exists() {
            Self::from_file(&config_path).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}
