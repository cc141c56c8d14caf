// tests/config_test.rs
use std::io::Write;

use relcut::config::{load_config, Config};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.notes.path, "package-notes.toml");
    assert!(config.release.notes_url.contains("{version}"));
    assert_eq!(config.fetch.max_attempts, 3);
}

#[test]
fn test_load_config_from_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().expect("Could not create temp file");
    writeln!(
        file,
        "[notes]\npath = \"notes/custom.toml\"\n\n[release]\nnotes_url = \"https://internal.example.com/{{version}}\"\n\n[fetch]\nmax_attempts = 5"
    )
    .expect("Could not write config");

    let config = load_config(file.path().to_str()).expect("Should load config");
    assert_eq!(config.notes.path, "notes/custom.toml");
    assert_eq!(
        config.release.notes_url,
        "https://internal.example.com/{version}"
    );
    assert_eq!(config.fetch.max_attempts, 5);
}

#[test]
fn test_partial_config_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("Could not create temp file");
    writeln!(file, "[fetch]\nmax_attempts = 1").expect("Could not write config");

    let config = load_config(file.path().to_str()).expect("Should load config");
    assert_eq!(config.fetch.max_attempts, 1);
    // Unspecified sections keep their defaults
    assert_eq!(config.notes.path, "package-notes.toml");
    assert!(config.release.notes_url.contains("{version}"));
}

#[test]
fn test_load_config_missing_explicit_path_is_an_error() {
    assert!(load_config(Some("/nonexistent/relcut.toml")).is_err());
}

#[test]
fn test_load_config_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("Could not create temp file");
    writeln!(file, "fetch = \"not a table\"").expect("Could not write config");

    assert!(load_config(file.path().to_str()).is_err());
}
