//! User settings stored as settings.json in the app data directory

use crate::constants::{API_KEY_ENV, API_KEY_SENTINELS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // TMDB credential
    pub api_key: Option<String>,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Resolve the API key: environment, then settings file, then the value
    /// embedded at build time.
    pub fn api_key(&self) -> ApiKey {
        let from_env = std::env::var(API_KEY_ENV).ok();
        ApiKey::resolve(from_env, self.api_key.clone(), option_env!("TMDB_API_KEY"))
    }
}

/// TMDB v3 API key
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// First configured candidate wins; an unconfigured one is skipped
    pub fn resolve(
        env: Option<String>,
        file: Option<String>,
        embedded: Option<&str>,
    ) -> Self {
        [env, file, embedded.map(str::to_string)]
            .into_iter()
            .flatten()
            .map(ApiKey::new)
            .find(ApiKey::is_configured)
            .unwrap_or_default()
    }

    /// True when the key holds a real value rather than blank or template text
    pub fn is_configured(&self) -> bool {
        let value = self.0.trim();
        !value.is_empty()
            && !API_KEY_SENTINELS
                .iter()
                .any(|sentinel| sentinel.eq_ignore_ascii_case(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.trim()
    }
}

// Keep the key out of logs
impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_configured() {
            f.write_str("ApiKey(***)")
        } else {
            f.write_str("ApiKey(unset)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_not_configured() {
        assert!(!ApiKey::new("").is_configured());
        assert!(!ApiKey::new("   ").is_configured());
        assert!(!ApiKey::new("your api key").is_configured());
        assert!(!ApiKey::new("YOUR_TMDB_API_KEY").is_configured());
        assert!(!ApiKey::new("your_tmdb_api_key").is_configured());
        assert!(ApiKey::new("0123456789abcdef").is_configured());
    }

    #[test]
    fn test_resolve_order() {
        let key = ApiKey::resolve(
            Some("from-env".to_string()),
            Some("from-file".to_string()),
            Some("embedded"),
        );
        assert_eq!(key.as_str(), "from-env");

        let key = ApiKey::resolve(None, Some("from-file".to_string()), Some("embedded"));
        assert_eq!(key.as_str(), "from-file");

        let key = ApiKey::resolve(Some(" ".to_string()), Some("your api key".to_string()), Some("embedded"));
        assert_eq!(key.as_str(), "embedded");

        assert!(!ApiKey::resolve(None, None, None).is_configured());
    }

    #[test]
    fn test_debug_hides_key() {
        let printed = format!("{:?}", ApiKey::new("secret-value"));
        assert!(!printed.contains("secret"));
    }

    #[test]
    fn test_load_missing_or_invalid_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());

        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(1280.0),
            window_h: Some(720.0),
            api_key: Some("abc".to_string()),
            ..Default::default()
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), r#"{"api_key":"k"}"#).unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.api_key.as_deref(), Some("k"));
        assert!(settings.window_x.is_none());
    }
}
