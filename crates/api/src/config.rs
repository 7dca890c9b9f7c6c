use serde::Deserialize;
use std::net::SocketAddr;

use shared::validation::{MAX_RADIUS_KM, MIN_RADIUS_KM};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
    #[serde(default)]
    pub map: MapConfig,
    /// External geocoding service configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Send Strict-Transport-Security (only behind TLS termination)
    #[serde(default)]
    pub hsts_enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InventoryConfig {
    /// Units added by the restock quick action when no amount is given
    #[serde(default = "default_restock_increment")]
    pub restock_increment: u32,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            restock_increment: default_restock_increment(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportsConfig {
    /// Delay before a generated report leaves Processing
    #[serde(default = "default_completion_delay_ms")]
    pub completion_delay_ms: u64,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            completion_delay_ms: default_completion_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,

    #[serde(default = "default_longitude")]
    pub default_longitude: f64,

    #[serde(default = "default_radius_meters")]
    pub default_radius_meters: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
            default_radius_meters: default_radius_meters(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingConfig {
    /// Whether geocoding lookups are sent to the external service
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub api_key: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_geocoding_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_geocoding_base_url(),
            api_key: String::new(),
            timeout_ms: default_geocoding_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Load the sample records at start-up
    #[serde(default = "default_load_sample_data")]
    pub load_sample_data: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            load_sample_data: default_load_sample_data(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Seconds between store size samples
    #[serde(default = "default_store_sample_interval_secs")]
    pub store_sample_interval_secs: u64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            store_sample_interval_secs: default_store_sample_interval_secs(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_request_timeout() -> u64 {
    30
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_restock_increment() -> u32 {
    domain::services::inventory::DEFAULT_RESTOCK_INCREMENT
}
fn default_completion_delay_ms() -> u64 {
    domain::services::reports::DEFAULT_COMPLETION_DELAY_MS
}
fn default_latitude() -> f64 {
    domain::models::map::DEFAULT_CENTER.lat
}
fn default_longitude() -> f64 {
    domain::models::map::DEFAULT_CENTER.lng
}
fn default_radius_meters() -> u32 {
    domain::models::map::DEFAULT_RADIUS_METERS
}
fn default_geocoding_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}
fn default_geocoding_timeout_ms() -> u64 {
    10000
}
fn default_load_sample_data() -> bool {
    true
}
fn default_store_sample_interval_secs() -> u64 {
    15
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with FD__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("FD").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// Builds the config from embedded defaults so tests do not depend on
    /// the working directory.
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            request_timeout_secs = 30

            [logging]
            level = "debug"
            format = "pretty"

            [security]
            cors_origins = []
            hsts_enabled = false

            [inventory]
            restock_increment = 10

            [reports]
            completion_delay_ms = 3000

            [map]
            default_latitude = 31.326
            default_longitude = 75.576
            default_radius_meters = 5000

            [geocoding]
            enabled = false
            base_url = "https://maps.googleapis.com"
            api_key = ""
            timeout_ms = 10000

            [seed]
            load_sample_data = true

            [metrics]
            store_sample_interval_secs = 15
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        // Skip validation in tests to allow partial configs
        Ok(cfg)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        if self.inventory.restock_increment == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "inventory.restock_increment must be at least 1".to_string(),
            ));
        }

        if self.metrics.store_sample_interval_secs == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "metrics.store_sample_interval_secs must be at least 1".to_string(),
            ));
        }

        let radius_km = self.map.default_radius_meters / 1000;
        if self.map.default_radius_meters % 1000 != 0
            || !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&radius_km)
        {
            return Err(ConfigValidationError::InvalidValue(format!(
                "map.default_radius_meters must be a whole number of km between {} and {}",
                MIN_RADIUS_KM, MAX_RADIUS_KM
            )));
        }

        if self.geocoding.enabled && self.geocoding.api_key.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "FD__GEOCODING__API_KEY must be set when geocoding is enabled".to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}
