use chrono::TimeDelta;

use crate::client::error::ConfigError;

/// Used when no API URL is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Largest file the portal will upload, in bytes
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

const DEFAULT_NOTICE_TTL_MS: i64 = 3000;
const DEFAULT_MODAL_CLOSE_MS: i64 = 1500;
const DEFAULT_FORM_RESET_MS: i64 = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Origin serving the `/api` routes, without a trailing slash
    pub api_url: String,
    pub max_upload_bytes: u64,
    /// How long a success or error banner stays visible
    pub notice_ttl: TimeDelta,
    /// Delay between a successful modal submit and the modal closing
    pub modal_close_delay: TimeDelta,
    /// Delay between a successful public submission and the form resetting
    pub form_reset_delay: TimeDelta,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            notice_ttl: TimeDelta::milliseconds(DEFAULT_NOTICE_TTL_MS),
            modal_close_delay: TimeDelta::milliseconds(DEFAULT_MODAL_CLOSE_MS),
            form_reset_delay: TimeDelta::milliseconds(DEFAULT_FORM_RESET_MS),
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// `SOCIETY_API_URL` is required; `SOCIETY_MAX_UPLOAD_BYTES`, `SOCIETY_NOTICE_TTL_MS`,
    /// `SOCIETY_MODAL_CLOSE_MS` and `SOCIETY_FORM_RESET_MS` fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var("SOCIETY_API_URL")
            .map_err(|_| ConfigError::MissingEnvVar("SOCIETY_API_URL".to_string()))?;

        let defaults = Self::default();

        Ok(Self {
            api_url: normalize_url(&api_url),
            max_upload_bytes: optional_u64("SOCIETY_MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            notice_ttl: optional_ms("SOCIETY_NOTICE_TTL_MS", DEFAULT_NOTICE_TTL_MS)?,
            modal_close_delay: optional_ms("SOCIETY_MODAL_CLOSE_MS", DEFAULT_MODAL_CLOSE_MS)?,
            form_reset_delay: optional_ms("SOCIETY_FORM_RESET_MS", DEFAULT_FORM_RESET_MS)?,
        })
    }

    /// Configuration baked in at compile time, used by browser builds which have no
    /// process environment.
    pub fn from_build_env() -> Self {
        match option_env!("SOCIETY_API_URL") {
            Some(url) => Self::with_api_url(url),
            None => Self::default(),
        }
    }

    pub fn with_api_url(api_url: &str) -> Self {
        Self {
            api_url: normalize_url(api_url),
            ..Self::default()
        }
    }

    /// Upload ceiling in whole megabytes, as shown to users
    pub fn max_upload_mb(&self) -> u64 {
        self.max_upload_bytes / (1024 * 1024)
    }
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn optional_u64(var: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}

fn optional_ms(var: &str, default_ms: i64) -> Result<TimeDelta, ConfigError> {
    let ms = optional_u64(var, default_ms as u64)?;
    let ms = i64::try_from(ms).map_err(|e| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: e.to_string(),
    })?;

    Ok(TimeDelta::milliseconds(ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_removed() {
        let config = Config::with_api_url("https://society.example.com/");

        assert_eq!(config.api_url, "https://society.example.com");
        assert_eq!(config.max_upload_mb(), 5);
    }

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.modal_close_delay, TimeDelta::milliseconds(1500));
        assert_eq!(config.notice_ttl, TimeDelta::milliseconds(3000));
    }
}
