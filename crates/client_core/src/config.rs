use std::{fs, path::Path, time::Duration};

use anyhow::{anyhow, Context};
use serde::Deserialize;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const SETTINGS_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub backend_url: String,
    /// `None` keeps requests pending until the backend answers.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.into(),
            request_timeout_secs: None,
        }
    }
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn with_backend_url(mut self, backend_url: Option<String>) -> Self {
        if let Some(url) = backend_url {
            self.backend_url = url;
        }
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    backend_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Defaults, then `catalog.toml` in the working directory, then environment.
pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(SETTINGS_FILE))
}

pub fn load_settings_from(path: &Path) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.backend_url {
                    settings.backend_url = v;
                }
                if file_cfg.request_timeout_secs.is_some() {
                    settings.request_timeout_secs = file_cfg.request_timeout_secs;
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
            }
        }
    }

    if let Ok(v) = std::env::var("CATALOG_BACKEND_URL") {
        settings.backend_url = v;
    }
    if let Ok(v) = std::env::var("APP__BACKEND_URL") {
        settings.backend_url = v;
    }

    if let Ok(v) = std::env::var("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_secs = Some(parsed);
        }
    }

    settings
}

/// Trims the configured address and drops trailing slashes so endpoint
/// paths can be appended verbatim.
pub fn normalize_backend_url(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(DEFAULT_BACKEND_URL.to_string());
    }

    let parsed = url::Url::parse(trimmed)
        .with_context(|| format!("backend url '{trimmed}' does not parse"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(anyhow!(
            "backend url '{trimmed}' must use http or https, got '{}'",
            parsed.scheme()
        ));
    }

    Ok(trimmed.to_string())
}
