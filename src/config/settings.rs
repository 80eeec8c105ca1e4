use serde::Deserialize;

use crate::utils::constants::{API_URL_DEFAULT, TIMEZONE_OFFSET_HOURS_DEFAULT};

/// ================================
/// Full CLI configuration
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServiceConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    pub credentials: Option<CredentialsConfig>,
}

/// ================================
/// Client-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SettingsConfig {
    /// API origin including the version prefix, no trailing slash
    pub api_url: Option<String>,
    /// hours east of UTC used for operation timestamps
    pub timezone_offset_hours: Option<i32>,
    pub logging: Option<LoggingConfig>,
    pub device: Option<DeviceConfig>,
}

impl SettingsConfig {
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(API_URL_DEFAULT)
    }

    pub fn timezone_offset_hours(&self) -> i32 {
        self.timezone_offset_hours
            .unwrap_or(TIMEZONE_OFFSET_HOURS_DEFAULT)
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }
}

/// ================================
/// Device descriptor overrides
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DeviceConfig {
    pub app_version: Option<String>,
    pub source_type: Option<String>,
    pub user_agent: Option<String>,
    pub os: Option<String>,
}

/// ================================
/// Credentials
/// ================================
#[derive(Deserialize, Clone)]
pub struct CredentialsConfig {
    pub inn: String,
    pub password: String,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("inn", &self.inn)
            .field("password", &"***")
            .finish()
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new (level: String, format: LogFormat) -> Self {
        Self { level: level, format: format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new("info".to_owned(), LogFormat::Compact)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "compact".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}
