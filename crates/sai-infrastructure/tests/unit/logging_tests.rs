//! Logging tests

use sai_infrastructure::config::LoggingConfig;
use sai_infrastructure::logging::{init_logging, parse_log_level};
use tempfile::TempDir;
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level(" info ").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_log_level_rejects_unknown() {
    let err = parse_log_level("verbose").unwrap_err();
    assert!(err.to_string().contains("verbose"));
}

// The only test in this binary that installs a global subscriber.
#[test]
fn test_init_logging_once() {
    let dir = TempDir::new().unwrap();
    let config = LoggingConfig {
        level: "debug".to_string(),
        json_format: true,
        file_output: Some(dir.path().join("sai.log")),
    };

    assert!(init_logging(&LoggingConfig {
        level: "loud".to_string(),
        ..LoggingConfig::default()
    })
    .is_err());
    assert!(init_logging(&config).is_ok());
    assert!(init_logging(&config).is_err());
}
