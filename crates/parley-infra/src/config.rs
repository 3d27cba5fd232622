//! Configuration loader for Parley.
//!
//! Reads `parley.toml` from the config directory (`~/.parley/` by default)
//! and deserializes it into [`RelayConfig`]. Falls back to the defaults
//! when the file is missing or malformed.

use std::path::{Path, PathBuf};

use parley_types::config::RelayConfig;

/// Resolve the path of `parley.toml`.
///
/// `PARLEY_CONFIG_DIR` overrides the directory; otherwise `~/.parley/` is
/// used (falling back to the working directory when no home exists).
pub fn resolve_config_path() -> PathBuf {
    let dir = match std::env::var("PARLEY_CONFIG_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".parley"),
    };
    dir.join("parley.toml")
}

/// Load the relay configuration from the given path.
///
/// - If the file does not exist, returns [`RelayConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(path: &Path) -> RelayConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return RelayConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return RelayConfig::default();
        }
    };

    match toml::from_str::<RelayConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            RelayConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("parley.toml")).await;
        assert_eq!(config.default_model, "gpt-4o-mini");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("parley.toml");
        tokio::fs::write(
            &path,
            r#"
api_base_url = "http://localhost:9000/api"
default_model = "blackboxai"
allowed_models = ["blackboxai"]
"#,
        )
        .await
        .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.api_base_url, "http://localhost:9000/api");
        assert_eq!(config.default_model, "blackboxai");
        assert_eq!(config.allowed_models, vec!["blackboxai".to_string()]);
        // Unspecified fields keep their defaults.
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("parley.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.default_model, "gpt-4o-mini");
    }
}
