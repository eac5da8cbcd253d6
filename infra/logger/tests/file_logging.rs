use countries_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_output_records_events() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("file-logging")
        .console(false)
        .path(&log_dir)
        .json(true)
        .level(LevelFilter::INFO)
        .init()?;
    assert!(logger.has_file_output());

    tracing::info!(countries = 249, "catalog rendered");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let content = fs::read_to_string(log_file)?;
    let line = content.lines().next().expect("log file should not be empty");
    assert!(line.starts_with('{'), "expected a JSON line, got {line}");
    assert!(line.contains("catalog rendered"));
    assert!(line.contains("\"countries\":249"));

    Ok(())
}
