//! Relay configuration.
//!
//! `RelayConfig` represents the top-level `parley.toml` that points the
//! relay at the remote chat backend and fixes the model allow-list.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the relay.
///
/// Loaded from `~/.parley/parley.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Base URL of the remote chat backend (`{base}/chat/new`, `{base}/chat`).
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Model used when the client sends no hint or an unknown one.
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Models a client may select. Anything else falls back to the default.
    #[serde(default = "default_allowed_models")]
    pub allowed_models: Vec<String>,

    /// Base URL for synthesized image links; the encoded prompt is appended.
    #[serde(default = "default_image_url_base")]
    pub image_url_base: String,

    /// Timeout for each outbound backend call, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "https://ai-abhinav.onrender.com/api".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_allowed_models() -> Vec<String> {
    vec![
        "gpt-4o-mini".to_string(),
        "blackboxai".to_string(),
        "reka-core".to_string(),
    ]
}

fn default_image_url_base() -> String {
    "https://text.pollinations.ai".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            default_model: default_model(),
            allowed_models: default_allowed_models(),
            image_url_base: default_image_url_base(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl RelayConfig {
    /// Resolve a client-supplied model hint against the allow-list.
    ///
    /// Unknown or absent hints fall back to `default_model`; no error is
    /// surfaced for a mismatch.
    pub fn resolve_model<'a>(&'a self, hint: Option<&'a str>) -> &'a str {
        match hint {
            Some(hint) if self.allowed_models.iter().any(|m| m == hint) => hint,
            _ => &self.default_model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = RelayConfig::default();
        assert_eq!(config.default_model, "gpt-4o-mini");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.allowed_models.contains(&"reka-core".to_string()));
    }

    #[test]
    fn test_resolve_model_allowed_hint() {
        let config = RelayConfig::default();
        assert_eq!(config.resolve_model(Some("blackboxai")), "blackboxai");
    }

    #[test]
    fn test_resolve_model_unknown_hint_falls_back() {
        let config = RelayConfig::default();
        assert_eq!(config.resolve_model(Some("gpt-17")), "gpt-4o-mini");
    }

    #[test]
    fn test_resolve_model_no_hint_falls_back() {
        let config = RelayConfig::default();
        assert_eq!(config.resolve_model(None), "gpt-4o-mini");
    }
}
