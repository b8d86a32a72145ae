//! Fitcal root: configuration plus the data directory it points at.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};

use crate::calendar_api::CalendarApi;
use crate::error::{FitCalError, FitCalResult};
use crate::fitcal_config::FitCalConfig;
use crate::month_key::check_user_id;
use crate::store::DirStore;

#[derive(Clone)]
pub struct FitCal {
    config: FitCalConfig,
    config_path: PathBuf,
}

impl FitCal {
    /// Load ~/.config/fitcal/config.toml (created on first run), with
    /// `FITCAL_*` environment variables taking precedence.
    pub fn load() -> FitCalResult<Self> {
        let config_path = FitCalConfig::config_path()?;

        if !config_path.exists() {
            FitCalConfig::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> FitCalResult<Self> {
        Self::load_with_env(config_path, Environment::with_prefix("FITCAL"))
    }

    fn load_with_env(config_path: &Path, env: Environment) -> FitCalResult<Self> {
        let config: FitCalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(env.try_parsing(true))
            .build()
            .map_err(|e| FitCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| FitCalError::Config(e.to_string()))?;

        tracing::debug!(path = %config_path.display(), "loaded config");

        Ok(FitCal {
            config,
            config_path: config_path.to_path_buf(),
        })
    }

    pub fn config(&self) -> &FitCalConfig {
        &self.config
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.config.user_id.as_deref()
    }

    /// Remember `user_id` as the default user.
    ///
    /// Only the config file is rewritten; `FITCAL_*` overrides in effect for
    /// this run are not persisted.
    pub fn set_user_id(&mut self, user_id: &str) -> FitCalResult<()> {
        check_user_id(user_id)?;

        let mut on_disk = Self::file_config(&self.config_path)?;
        on_disk.user_id = Some(user_id.to_string());
        on_disk.save_to(&self.config_path)?;

        self.config.user_id = Some(user_id.to_string());
        Ok(())
    }

    fn file_config(config_path: &Path) -> FitCalResult<FitCalConfig> {
        Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| FitCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| FitCalError::Config(e.to_string()))
    }

    pub fn api(&self) -> CalendarApi<DirStore> {
        CalendarApi::new(DirStore::new(self.data_path()))
    }
}
