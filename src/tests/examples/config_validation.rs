#[cfg(test)]
mod tests {

    use std::io::Write;
    use std::path::Path;

    use serial_test::serial;

    use crate::config::proc_loader::{expand_env_vars, file_to_config, parse_config};
    use crate::config::proc_validator::validate_service_config;
    use crate::config::settings::LogFormat;
    use crate::utils::config_loader;

    #[test]
    #[serial]
    fn demo_config_is_valid() {
        std::env::remove_var("NALOG_INN");
        std::env::remove_var("NALOG_PASSWORD");
        std::env::remove_var("NALOG_TZ_OFFSET");
        let path = Path::new("demos/nalog-cli.yaml");
        let service_config = file_to_config(path)
            .expect("demos/nalog-cli.yaml must exist in repo root for tests");

        validate_service_config(&service_config).unwrap();
        assert_eq!(service_config.settings.api_url(), "https://lknpd.nalog.ru/api/v1");
        assert_eq!(service_config.settings.timezone_offset_hours(), 3);
        let credentials = service_config.credentials.unwrap();
        assert_eq!(credentials.inn, "000000000000");
        assert_eq!(credentials.password, "change-me");
    }

    #[test]
    #[serial]
    fn env_vars_fill_placeholders() {
        std::env::set_var("NALOG_TEST_INN", "771234567890");
        let expanded = expand_env_vars("inn: ${NALOG_TEST_INN}\nzone: ${NALOG_TEST_MISSING:5}\nempty: '${NALOG_TEST_MISSING}'");
        std::env::remove_var("NALOG_TEST_INN");

        assert_eq!(expanded, "inn: 771234567890\nzone: 5\nempty: ''");
    }

    #[test]
    #[serial]
    fn config_loader_reads_file_from_disk() {
        std::env::set_var("NALOG_TEST_PASSWORD", "s3cret");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "settings:\n  api_url: http://127.0.0.1:8080/api/v1/\n  logging:\n    level: debug\n    format: json\ncredentials:\n  inn: ' 771234567890 '\n  password: ${{NALOG_TEST_PASSWORD}}\n"
        )
        .unwrap();

        let service_config = config_loader::run(file.path().to_str().unwrap()).unwrap();
        std::env::remove_var("NALOG_TEST_PASSWORD");

        // trailing slash stripped, inn trimmed
        assert_eq!(service_config.settings.api_url(), "http://127.0.0.1:8080/api/v1");
        let logging = service_config.settings.logging.unwrap();
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.format, LogFormat::Json);
        let credentials = service_config.credentials.unwrap();
        assert_eq!(credentials.inn, "771234567890");
        assert_eq!(credentials.password, "s3cret");
    }

    #[test]
    fn missing_settings_fall_back_to_defaults() {
        let service_config = parse_config("credentials:\n  inn: '771234567890'\n  password: x\n".to_string()).unwrap();
        assert_eq!(service_config.settings.api_url(), "https://lknpd.nalog.ru/api/v1");
        assert_eq!(service_config.settings.timezone_offset_hours(), 3);
        assert!(service_config.settings.logging.is_some());
    }

    #[test]
    fn credentials_are_not_logged() {
        let service_config = parse_config("credentials:\n  inn: '771234567890'\n  password: hunter2\n".to_string()).unwrap();
        let debug = format!("{:?}", service_config.credentials.unwrap());
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("771234567890"));
    }

    #[test]
    fn invalid_config_reports_all_errors() {
        let invalid_yaml = r#"
settings:
  api_url: "ftp://lknpd.nalog.ru"
  timezone_offset_hours: 30
  logging:
    level: verbose
    format: compact
  device:
    os: ""
credentials:
  inn: "77-12"
  password: ""
"#;
        let err = parse_config(invalid_yaml.to_string()).unwrap_err().to_string();
        assert!(err.contains("config is not valid"), "{}", err);
        assert!(err.contains("api_url"), "expected api_url error: {}", err);
        assert!(err.contains("timezone_offset_hours"), "expected offset error: {}", err);
        assert!(err.contains("logging.level"), "expected log level error: {}", err);
        assert!(err.contains("device.os"), "expected device error: {}", err);
        assert!(err.contains("digits only"), "expected inn error: {}", err);
        assert!(err.contains("password is empty"), "expected password error: {}", err);
    }
}
