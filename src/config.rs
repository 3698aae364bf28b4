use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::core::SynonymTable;
use crate::models::{RecommendationDefaults, DEFAULT_POPULARITY, PLACEHOLDER_IMAGE_URL};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub recommendation: RecommendationSettings,
    #[serde(default)]
    pub location: LocationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), workers: None }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_query_timeout")]
    pub query_timeout_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            query_timeout_secs: default_query_timeout(),
        }
    }
}

fn default_database_url() -> String { "mysql://root@127.0.0.1:3306/capstonedormhub".to_string() }
fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_acquire_timeout() -> u64 { 5 }
fn default_idle_timeout() -> u64 { 600 }
fn default_query_timeout() -> u64 { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
    #[serde(default = "default_max_top_n")]
    pub max_top_n: usize,
    #[serde(default = "default_max_price")]
    pub default_max_price: f64,
    #[serde(default = "default_popularity")]
    pub popularity: f64,
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    #[serde(default = "default_location_match_score")]
    pub location_match_score: f64,
    #[serde(default = "default_nearby_limit")]
    pub nearby_limit: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            default_top_n: default_top_n(),
            max_top_n: default_max_top_n(),
            default_max_price: default_max_price(),
            popularity: default_popularity(),
            placeholder_image: default_placeholder_image(),
            location_match_score: default_location_match_score(),
            nearby_limit: default_nearby_limit(),
        }
    }
}

impl RecommendationSettings {
    pub fn defaults(&self) -> RecommendationDefaults {
        RecommendationDefaults {
            top_n: self.default_top_n,
            max_top_n: self.max_top_n,
            max_price: self.default_max_price,
            location_match_score: self.location_match_score,
            nearby_limit: self.nearby_limit,
        }
    }
}

fn default_top_n() -> usize { 10 }
fn default_max_top_n() -> usize { 100 }
fn default_max_price() -> f64 { 999_999.0 }
fn default_popularity() -> f64 { DEFAULT_POPULARITY }
fn default_placeholder_image() -> String { PLACEHOLDER_IMAGE_URL.to_string() }
fn default_location_match_score() -> f64 { 10.0 }
fn default_nearby_limit() -> usize { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct LocationSettings {
    /// Synonym groups: canonical name -> alias phrases
    #[serde(default = "SynonymTable::default_groups")]
    pub synonyms: BTreeMap<String, Vec<String>>,
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self { synonyms: SynonymTable::default_groups() }
    }
}

impl LocationSettings {
    pub fn synonym_table(&self) -> SynonymTable {
        SynonymTable::from_map(&self.synonyms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: default_log_level(), format: default_log_format() }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with DORMHUB__)
    /// 4. DATABASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DORMHUB__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        with_database_url_override(settings)?.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("DORMHUB")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply `DATABASE_URL` on top of the layered configuration, if set
fn with_database_url_override(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("DATABASE_URL") {
        Ok(url) => Config::builder()
            .add_source(settings)
            .set_override("database.url", url)?
            .build(),
        Err(_) => Ok(settings),
    }
}
