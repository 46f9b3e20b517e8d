//! Global enaptar configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};

use crate::error::{EnaptarError, EnaptarResult};

static DEFAULT_EVENTS_FILE: &str = "~/.enaptar/events.json";

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

fn is_default_events_file(p: &PathBuf) -> bool {
    *p == default_events_file()
}

/// Configuration at ~/.config/enaptar/config.toml
///
/// `ENAPTAR_EVENTS_FILE` in the environment overrides the file.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EnaptarConfig {
    #[serde(default = "default_events_file", skip_serializing_if = "is_default_events_file")]
    pub events_file: PathBuf,
}

impl Default for EnaptarConfig {
    fn default() -> Self {
        EnaptarConfig {
            events_file: default_events_file(),
        }
    }
}

impl EnaptarConfig {
    pub fn config_path() -> EnaptarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EnaptarError::Config("Could not determine config directory".into()))?
            .join("enaptar");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented default on first run.
    pub fn load() -> EnaptarResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from `path` (optional) layered under the environment.
    pub fn load_from(path: &Path) -> EnaptarResult<Self> {
        Self::load_layered(path, None)
    }

    /// `env` replaces the process environment when given.
    fn load_layered(path: &Path, env: Option<Map<String, String>>) -> EnaptarResult<Self> {
        let config: EnaptarConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("ENAPTAR").source(env))
            .build()
            .map_err(|e| EnaptarError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EnaptarError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), events_file = %config.events_file.display(), "loaded config");
        Ok(config)
    }

    /// Events file with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.events_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EnaptarResult<()> {
        let contents = format!(
            "\
# enaptar configuration

# Where your events are stored:
# events_file = \"{}\"
",
            DEFAULT_EVENTS_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EnaptarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EnaptarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Map<String, String> {
        vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn default_config_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enaptar/config.toml");

        EnaptarConfig::create_default_config(&path).unwrap();
        let config = EnaptarConfig::load_layered(&path, Some(env(&[]))).unwrap();

        assert_eq!(config.events_file, PathBuf::from(DEFAULT_EVENTS_FILE));
    }

    #[test]
    fn events_file_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "events_file = \"/tmp/naptar/events.json\"\n").unwrap();

        let config = EnaptarConfig::load_layered(&path, Some(env(&[]))).unwrap();
        assert_eq!(config.events_path(), PathBuf::from("/tmp/naptar/events.json"));
    }

    #[test]
    fn default_events_path_is_under_dot_enaptar() {
        let expanded = EnaptarConfig::default().events_path();
        assert!(expanded.ends_with(".enaptar/events.json"));
    }

    #[test]
    fn environment_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "events_file = \"/a/events.json\"\n").unwrap();

        let vars = env(&[("ENAPTAR_EVENTS_FILE", "/b/events.json")]);
        let config = EnaptarConfig::load_layered(&path, Some(vars)).unwrap();
        assert_eq!(config.events_path(), PathBuf::from("/b/events.json"));
    }

    #[test]
    fn environment_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let vars = env(&[("ENAPTAR_EVENTS_FILE", "/b/events.json")]);
        let config = EnaptarConfig::load_layered(&path, Some(vars)).unwrap();
        assert_eq!(config.events_file, PathBuf::from("/b/events.json"));
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "events_file = \"/a/events.json\"\n").unwrap();

        let vars = env(&[("ENAPTAR_LOG", "debug"), ("EVENTS_FILE", "/c/events.json")]);
        let config = EnaptarConfig::load_layered(&path, Some(vars)).unwrap();
        assert_eq!(config.events_file, PathBuf::from("/a/events.json"));
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "events_file = [").unwrap();

        let result = EnaptarConfig::load_layered(&path, Some(env(&[])));
        assert!(matches!(result, Err(EnaptarError::Config(_))));
    }
}
