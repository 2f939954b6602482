use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::state::pagination::PAGE_SIZES;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Location the screen mounts at, e.g. `?search=love&tag=history`
    #[serde(default)]
    pub initial_query: String,

    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_api_base_url() -> String {
    posts_api::DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u64 {
    PAGE_SIZES[0]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            initial_query: String::new(),
            page_size: default_page_size(),
        }
    }
}

impl Settings {
    /// Load from `post-manager.toml` (or `$POST_MANAGER_CONFIG`) and
    /// `POST_MANAGER__*` environment variables, then validate.
    pub fn new() -> Result<Self, SettingsError> {
        let config_path = std::env::var("POST_MANAGER_CONFIG")
            .unwrap_or_else(|_| "post-manager.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(Environment::with_prefix("POST_MANAGER").separator("__"))
            .build()?;

        Self::from_config(settings)
    }

    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let url = url::Url::parse(&self.api_base_url).map_err(|e| SettingsError::Invalid {
            field: "api_base_url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SettingsError::Invalid {
                field: "api_base_url",
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        if self.page_size == 0 {
            return Err(SettingsError::Invalid {
                field: "page_size",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
