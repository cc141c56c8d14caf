use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for relcut.
///
/// Covers where curated package notes live, where release narrative is
/// fetched from, and how persistently to retry that fetch.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub notes: NotesConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Returns the default package notes file path.
fn default_notes_path() -> String {
    "package-notes.toml".to_string()
}

/// Configuration for the curated notes store.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NotesConfig {
    #[serde(default = "default_notes_path")]
    pub path: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        NotesConfig {
            path: default_notes_path(),
        }
    }
}

/// Returns the default release narrative URL template.
fn default_notes_url() -> String {
    "https://releases.example.com/notes/{version}".to_string()
}

/// Configuration for the release narrative source.
///
/// The URL is a template; `{version}` is replaced with the release
/// version string at fetch time.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_notes_url")]
    pub notes_url: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            notes_url: default_notes_url(),
        }
    }
}

/// Returns the default fetch attempt budget.
fn default_max_attempts() -> u32 {
    3
}

/// Configuration for narrative fetching.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FetchConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            max_attempts: default_max_attempts(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            notes: NotesConfig::default(),
            release: ReleaseConfig::default(),
            fetch: FetchConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `relcut.toml` in current directory
/// 3. `~/.config/.relcut.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./relcut.toml").exists() {
        fs::read_to_string("./relcut.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".relcut.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
