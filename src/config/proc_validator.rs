//! Configuration validation with aggregated errors.
//! Every issue is collected into a Vec<String> so a broken file is reported
//! in one pass.

use tracing::{error, info};

use crate::config::settings::{CredentialsConfig, ServiceConfig, SettingsConfig};
use crate::utils::constants::TIMEZONE_OFFSET_HOURS_MAX;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_settings(&cfg.settings, &mut errors);

    if let Some(credentials) = &cfg.credentials {
        validate_credentials(credentials, &mut errors);
    }

    if errors.is_empty() {
        info!("config is valid");
        Ok(())
    } else {
        for e in &errors {
            error!("config: {}", e);
        }
        Err(errors)
    }
}

fn validate_settings(settings: &SettingsConfig, errors: &mut Vec<String>) {
    if let Some(url) = &settings.api_url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            errors.push(format!(
                "settings.api_url '{}' must start with http:// or https://",
                url
            ));
        }
    }

    if let Some(offset) = settings.timezone_offset_hours {
        if offset.unsigned_abs() > TIMEZONE_OFFSET_HOURS_MAX.unsigned_abs() {
            errors.push(format!(
                "settings.timezone_offset_hours {} is out of range -{}..={}",
                offset, TIMEZONE_OFFSET_HOURS_MAX, TIMEZONE_OFFSET_HOURS_MAX
            ));
        }
    }

    if let Some(logging) = &settings.logging {
        if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "settings.logging.level '{}' must be one of {:?}",
                logging.level, LOG_LEVELS
            ));
        }
    }

    if let Some(device) = &settings.device {
        let fields = [
            ("app_version", &device.app_version),
            ("source_type", &device.source_type),
            ("user_agent", &device.user_agent),
            ("os", &device.os),
        ];
        for (name, value) in fields {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                errors.push(format!("settings.device.{} must not be empty", name));
            }
        }
    }
}

fn validate_credentials(credentials: &CredentialsConfig, errors: &mut Vec<String>) {
    if credentials.inn.is_empty() {
        errors.push("credentials.inn is empty".to_string());
    } else if !credentials.inn.bytes().all(|b| b.is_ascii_digit()) {
        errors.push(format!("credentials.inn '{}' must contain digits only", credentials.inn));
    }
    if credentials.password.is_empty() {
        errors.push("credentials.password is empty".to_string());
    }
}
