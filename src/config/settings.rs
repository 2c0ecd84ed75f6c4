//! Configuration settings for medalwatch.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Feed configuration.
    pub source: SourceConfig,
    /// Mount/output configuration.
    pub output: OutputConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location, falling back to defaults.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file, layered with `MEDALWATCH__*` environment overrides.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(default_path);

        let builder = ::config::Config::builder()
            .add_source(::config::File::from(config_path).required(false))
            .add_source(
                ::config::Environment::with_prefix(super::ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            );

        builder
            .build()
            .and_then(|layered| layered.try_deserialize())
            .map_err(|e| crate::Error::config(e.to_string()))
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(default_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn default_path() -> PathBuf {
    super::config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// Feed configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Endpoint serving the athlete payload.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent sent with each request.
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://script.google.com/macros/s/XXXXX/exec".to_string(),
            timeout_secs: 30,
            user_agent: format!("medalwatch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File the rendered widget is written to.
    pub path: PathBuf,
    /// Element id of the mount point wrapping the rendered content.
    pub mount_id: String,
    /// Base path medal badge images are resolved against.
    pub assets_base: String,
    /// Write a complete HTML document instead of a fragment.
    pub standalone: bool,
    /// Stylesheet linked from standalone documents.
    pub stylesheet: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("widget.html"),
            mount_id: "widget".to_string(),
            assets_base: "icons".to_string(),
            standalone: false,
            stylesheet: Some("style.css".to_string()),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Also write logs to a daily rolling file under the data directory.
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "medalwatch=info".to_string(),
            file: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("medalwatch-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load(Some(temp_path("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(
            &path,
            "[source]\nendpoint = \"https://feed.test/exec\"\n\n[output]\nstandalone = true\n",
        )
        .unwrap();

        let config = Config::load(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.source.endpoint, "https://feed.test/exec");
        assert_eq!(config.source.timeout_secs, 30);
        assert!(config.output.standalone);
        assert_eq!(config.output.assets_base, "icons");
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved/config.toml");
        let mut config = Config::default();
        config.output.mount_id = "results".to_string();
        config.logging.file = true;

        config.save(Some(path.clone())).unwrap();
        let loaded = Config::load(Some(path.clone())).unwrap();
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let path = temp_path("broken.toml");
        std::fs::write(&path, "[source\nendpoint = ").unwrap();

        let err = Config::load(Some(path.clone())).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, crate::Error::Config(_)));
    }
}
