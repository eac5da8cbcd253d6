use countries_logger::{LevelFilter, Logger, LoggerError};
use serial_test::serial;

#[test]
#[serial]
fn second_init_returns_subscriber_error() {
    let logger = Logger::builder()
        .name("init-twice")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");
    assert!(!logger.has_file_output(), "console-only logger writes no file");

    let err = Logger::builder().name("init-twice-again").init().expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "unexpected error: {err}");
}
