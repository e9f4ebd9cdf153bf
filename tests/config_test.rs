//! Tests for loading settings from disk.

use std::io::Write;
use strictly_timetravel::Settings;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[display]\nsort_ascending = false\ndraw_message = \"Remis\"\n\n[logging]\nfilter = \"debug\"\nfile = \"game.log\""
    )
    .unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert!(!*settings.display().sort_ascending());
    assert_eq!(settings.display().draw_message(), "Remis");
    assert_eq!(settings.logging().filter(), "debug");
    assert_eq!(settings.logging().file().to_str(), Some("game.log"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert!(*settings.display().sort_ascending());
    assert_eq!(settings.display().draw_message(), "Draw");
}

#[test]
fn test_invalid_file_is_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[display]\nsort_ascending = \"sideways\"").unwrap();
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
