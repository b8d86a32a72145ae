//! Global fitcal configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FitCalError, FitCalResult};

static DEFAULT_DATA_DIR: &str = "~/fitcal";
const DEFAULT_TYPE_SPEED_MS: u64 = 30;

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

fn default_type_speed_ms() -> u64 {
    DEFAULT_TYPE_SPEED_MS
}

fn is_default_type_speed(ms: &u64) -> bool {
    *ms == DEFAULT_TYPE_SPEED_MS
}

/// Configuration at ~/.config/fitcal/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FitCalConfig {
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Delay per character when typing out highlighted text. 0 disables it.
    #[serde(default = "default_type_speed_ms", skip_serializing_if = "is_default_type_speed")]
    pub type_speed_ms: u64,
}

impl Default for FitCalConfig {
    fn default() -> Self {
        FitCalConfig {
            data_dir: default_data_dir(),
            user_id: None,
            type_speed_ms: DEFAULT_TYPE_SPEED_MS,
        }
    }
}

impl FitCalConfig {
    pub fn config_path() -> FitCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FitCalError::Config("Could not determine config directory".into()))?
            .join("fitcal");

        Ok(config_dir.join("config.toml"))
    }

    pub fn save_to(&self, path: &Path) -> FitCalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| FitCalError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| FitCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> FitCalResult<()> {
        let contents = format!(
            "\
# fitcal configuration

# Where workout records live:
# data_dir = \"{}\"

# Whose calendar to use (overridden by --user):
# user_id = \"me\"

# Milliseconds per character when typing out highlights (0 to disable):
# type_speed_ms = {}
",
            DEFAULT_DATA_DIR, DEFAULT_TYPE_SPEED_MS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                FitCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| FitCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
