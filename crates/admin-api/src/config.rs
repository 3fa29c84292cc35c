//! Console settings - API endpoint and display preferences.
//!
//! Settings are loaded from `settings.toml` in the user's config directory at
//! startup. Environment variables override the file, CLI flags override both.

use std::path::{Path, PathBuf};
use std::time::Duration;

use admin_model::{DEFAULT_PAGE_SIZE, DEFAULT_UTC_OFFSET_HOURS};
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ApiSettings::base_url`].
pub const ENV_API_URL: &str = "ADMIN_API_URL";

/// Environment variable overriding [`ApiSettings::auth_token`].
pub const ENV_API_TOKEN: &str = "ADMIN_API_TOKEN";

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Console settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Admin API connection.
    pub api: ApiSettings,

    /// Table display preferences.
    pub display: DisplaySettings,
}

impl Settings {
    /// Load settings from the default path, then apply environment overrides.
    #[must_use]
    pub fn load() -> Self {
        let mut settings = Self::load_from(&Self::config_path());
        settings.api.apply_overrides(
            std::env::var(ENV_API_URL).ok(),
            std::env::var(ENV_API_TOKEN).ok(),
        );
        settings
    }

    /// Load settings from a specific path.
    ///
    /// A missing file yields defaults; an unreadable one is logged and also
    /// yields defaults.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            tracing::debug!("No settings file at {}", path.display());
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring invalid settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Get the default config file path.
    #[must_use]
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "AdminConsole", "admin-console")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// API SETTINGS
// =============================================================================

/// Connection settings for the admin API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL that endpoint paths are appended to.
    pub base_url: String,

    /// Bearer token sent as `Authorization`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            auth_token: None,
            timeout_secs: 30,
        }
    }
}

impl ApiSettings {
    /// Replaces the base URL and token with any provided non-empty values.
    pub fn apply_overrides(&mut self, base_url: Option<String>, auth_token: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(token) = auth_token.filter(|t| !t.trim().is_empty()) {
            self.auth_token = Some(token);
        }
    }

    /// Request timeout as a [`Duration`]; zero falls back to 30 seconds.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            Duration::from_secs(30)
        } else {
            Duration::from_secs(self.timeout_secs)
        }
    }
}

// =============================================================================
// DISPLAY SETTINGS
// =============================================================================

/// Table display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Rows per page when a screen opens.
    pub page_size: u32,

    /// Hours added to server timestamps before display.
    pub utc_offset_hours: i32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = Settings::default();
        settings.api.base_url = "https://admin.example.com/api".to_string();
        settings.display.page_size = 20;
        std::fs::write(&path, toml::to_string_pretty(&settings).unwrap()).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "api = 12").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[display]\npage_size = 50\n").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.display.page_size, 50);
        assert_eq!(settings.display.utc_offset_hours, DEFAULT_UTC_OFFSET_HOURS);
        assert_eq!(settings.api, ApiSettings::default());
    }

    #[test]
    fn overrides_ignore_blank_values() {
        let mut api = ApiSettings::default();
        api.apply_overrides(Some("  ".to_string()), Some("tok".to_string()));
        assert_eq!(api.base_url, ApiSettings::default().base_url);
        assert_eq!(api.auth_token.as_deref(), Some("tok"));
    }
}
