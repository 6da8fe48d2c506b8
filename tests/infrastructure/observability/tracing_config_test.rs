use jarvis::infrastructure::observability::TracingConfig;
use jarvis::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_default_config_when_created_then_local_pretty_output() {
    let config = TracingConfig::default();

    assert_eq!(config.environment, Environment::Local);
    assert!(!config.json_format);
    assert!(config.filter.contains("jarvis=debug"));
}

#[test]
fn given_logging_settings_when_converting_then_copies_level_and_format() {
    let settings = LoggingSettings {
        level: "warn".to_string(),
        json: true,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Prod);

    assert_eq!(config.filter, "warn");
    assert!(config.json_format);
    assert_eq!(config.environment, Environment::Prod);
}

#[test]
fn given_blank_level_when_converting_then_uses_default_filter() {
    let settings = LoggingSettings {
        level: " ".to_string(),
        json: false,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Test);

    assert_eq!(config.filter, TracingConfig::default().filter);
}
