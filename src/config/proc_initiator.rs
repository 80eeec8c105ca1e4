use crate::config::settings::{LogFormat, LoggingConfig, ServiceConfig};

pub fn initiate_default_values(mut config: ServiceConfig) -> ServiceConfig {
    if config.settings.logging.is_none() {
        config.settings.logging = Some(LoggingConfig::new(
            "info".to_owned(),
            LogFormat::from_env(),
        ));
    }

    // urls are joined with "/<path>"
    config.settings.api_url = config
        .settings
        .api_url
        .map(|url| url.trim().trim_end_matches('/').to_owned());

    if let Some(credentials) = &mut config.credentials {
        credentials.inn = credentials.inn.trim().to_owned();
    }

    config
}
