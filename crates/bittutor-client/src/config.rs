//! Client configuration
//!
//! Layered from built-in defaults, an optional `client.toml` in the user's
//! config directory, then `BITTUTOR_*` environment variables. Command-line
//! flags are applied on top by the binary.

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use reqwest::Url;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Server endpoint every request is POSTed to
    pub base_url: String,
    pub request_timeout_secs: u64,
    /// Open the sign-in page in the system browser after registering
    pub open_browser: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            open_browser: false,
        }
    }
}

impl ClientConfig {
    /// Location of the optional config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bittutor").join("client.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path().as_deref())
    }

    /// Load using `file` as the config file. A missing file is not an error.
    ///
    /// The result is not validated, so command-line overrides can still
    /// replace a bad value; call [`ClientConfig::validate`] once they are
    /// applied.
    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("request_timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("open_browser", false)?;

        if let Some(path) = file {
            tracing::debug!("Reading config from {:?}", path);
            builder = builder.add_source(File::from(path).required(false));
        }

        let config: ClientConfig = builder
            .add_source(Environment::with_prefix("BITTUTOR").try_parsing(true))
            .build()?
            .try_deserialize()
            .context("Invalid client configuration")?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid base URL {:?}", self.base_url))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            bail!("Base URL must be http or https, got {:?}", self.base_url);
        }

        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than zero");
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Every test that loads reads the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<T>(key: &str, value: &str, f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: ENV_LOCK serializes every test in this module that touches the environment
        unsafe { std::env::set_var(key, value) };
        let out = f();
        unsafe { std::env::remove_var(key) };
        out
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = with_env("BITTUTOR_BASE_URL", "https://env.example.org", || {
            ClientConfig::load_from(None).unwrap()
        });
        assert_eq!(config.base_url, "https://env.example.org");

        let config = with_env("BITTUTOR_REQUEST_TIMEOUT_SECS", "5", || {
            ClientConfig::load_from(None).unwrap()
        });
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_bad_env_url_can_be_overridden() {
        let mut config = with_env("BITTUTOR_BASE_URL", "not a url", || {
            ClientConfig::load_from(None).unwrap()
        });
        assert_eq!(config.base_url, "not a url");
        assert!(config.validate().is_err());

        config.base_url = "http://127.0.0.1:9000".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let config = ClientConfig::load_from(None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(!config.open_browser);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(uuid::Uuid::new_v4().to_string());
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("client.toml");
        std::fs::write(
            &path,
            "base_url = \"https://tutor.example.org\"\nopen_browser = true\n",
        )
        .unwrap();

        let config = {
            let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            ClientConfig::load_from(Some(&path)).unwrap()
        };
        assert_eq!(config.base_url, "https://tutor.example.org");
        assert!(config.open_browser);
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir()
            .join(uuid::Uuid::new_v4().to_string())
            .join("client.toml");
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let config = ClientConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let mut config = ClientConfig::default();
        assert!(config.validate().is_ok());

        config.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "ftp://127.0.0.1".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ClientConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
