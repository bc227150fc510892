use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

/// Prefix of environment variables overriding file settings, e.g.
/// `COZY_CONTENT_API_URL`.
pub const ENV_PREFIX: &str = "COZY";

/// Configuration file used when `COZY_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Configuration options of the blog server.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Root URL of the content API serving entries and lookups.
    #[validate(url)]
    pub content_api_url: String,
    #[serde(default = "default_request_timeout_secs")]
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_site_title")]
    pub site_title: String,
    #[serde(default = "default_items_per_page")]
    #[validate(range(min = 1))]
    pub items_per_page: usize,
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_static_dir() -> String {
    "assets".to_string()
}

fn default_site_title() -> String {
    "Уютный дневник".to_string()
}

fn default_items_per_page() -> usize {
    crate::domain::pagination::DEFAULT_ITEMS_PER_PAGE
}

impl ServerConfig {
    /// Loads settings from an optional YAML file overlaid with `COZY_*`
    /// environment variables.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let server_config: ServerConfig = settings.try_deserialize()?;
        server_config.validate()?;
        Ok(server_config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Glob handed to Tera for template discovery.
    pub fn templates_glob(&self) -> String {
        format!("{}/**/*.html", self.templates_dir.trim_end_matches('/'))
    }
}
