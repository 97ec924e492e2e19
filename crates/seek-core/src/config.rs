use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub field: FieldConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    /// Placeholder shown while the search field is empty
    pub placeholder: String,
    /// Upper bound on matched results pulled from the matcher
    pub max_results: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            placeholder: "Type to search...".to_string(),
            max_results: 50,
        }
    }
}

/// Read and parse a config file, reporting what went wrong.
pub fn try_load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }
    match try_load_from(path) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            tracing::warn!("{}, using defaults", e);
            Config::default()
        }
    }
}

pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            tracing::warn!("Could not determine home directory, using defaults");
            Config::default()
        }
    }
}

fn config_path() -> Option<PathBuf> {
    // ~/.config/ (XDG convention) on every platform
    Some(
        dirs::home_dir()?
            .join(".config")
            .join("seek")
            .join("config.toml"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let file = write_config("[field]\nplaceholder = \"Find\"\n");
        let config = try_load_from(file.path()).unwrap();

        assert_eq!(config.field.placeholder, "Find");
        assert_eq!(config.field.max_results, 50);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn parses_full_config() {
        let file = write_config(
            "[window]\nwidth = 800.0\nheight = 300.0\n\n[field]\nplaceholder = \"Go\"\nmax_results = 10\n",
        );
        let config = try_load_from(file.path()).unwrap();

        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 300.0);
        assert_eq!(config.field.max_results, 10);
    }

    #[test]
    fn parse_error_is_reported() {
        let file = write_config("[window\nwidth = ");
        let err = try_load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = try_load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_from_falls_back_on_bad_file() {
        let file = write_config("not = [valid");
        assert_eq!(load_from(file.path()), Config::default());

        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_from(&dir.path().join("absent.toml")), Config::default());
    }
}
