#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Wallet RPC Client Configuration
//!
//! This crate provides configuration management for the wallet RPC client.
//! It handles loading, saving, and managing configuration files that specify:
//! - Where the wallet daemon listens and how to authenticate against it
//! - Logging configuration
//!
//! Configuration is stored in TOML format and can be loaded from files,
//! overridden from the environment, or created with defaults that match a
//! locally running daemon.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default JSON-RPC endpoint of a locally running wallet daemon.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:18082/json_rpc";

/// Environment variable overriding [`WalletConfig::endpoint`].
pub const ENV_URL: &str = "WALLET_RPC_URL";
/// Environment variable overriding [`WalletConfig::username`].
pub const ENV_USER: &str = "WALLET_RPC_USER";
/// Environment variable overriding [`WalletConfig::password`].
pub const ENV_PASSWORD: &str = "WALLET_RPC_PASSWORD";
/// Environment variable overriding [`WalletConfig::timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "WALLET_RPC_TIMEOUT_SECS";

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Configuration file was not found at the specified path
    #[error("Config file not found at: {0}")]
    NotFound(PathBuf),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Wallet daemon connection settings
    pub wallet: WalletConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the wallet daemon
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// JSON-RPC endpoint: a full URL or a bare `host:port`
    pub endpoint: String,
    /// Username for HTTP authentication (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password for HTTP authentication (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Daemon-generated login file holding `user:password` (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_file: Option<PathBuf>,
    /// HTTP client timeout in seconds; unset leaves the transport default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (e.g. `info`, `walletrpc_http=trace`)
    pub level: String,
    /// Log file path (optional); stderr when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "info".to_string(), file: None } }
}

impl WalletConfig {
    /// Connection settings for `endpoint` with no credentials.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: None,
            password: None,
            login_file: None,
            timeout_secs: None,
        }
    }

    /// Whether exactly one of `username` and `password` is set.
    pub fn has_partial_credentials(&self) -> bool {
        self.username.is_some() != self.password.is_some()
    }

    /// Returns `(username, password)` when both are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => Some((u.as_str(), p.as_str())),
            _ => None,
        }
    }

    /// The configured HTTP timeout, if any.
    pub fn timeout(&self) -> Option<Duration> { self.timeout_secs.map(Duration::from_secs) }

    /// Overrides fields from `WALLET_RPC_*` environment variables.
    ///
    /// Unparseable timeout values are ignored.
    pub fn apply_env(&mut self) {
        self.apply_env_internal(|key| std::env::var(key).ok());
    }

    /// Internal function for testing - allows injection of environment values
    fn apply_env_internal(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(url) = get(ENV_URL) {
            self.endpoint = url;
        }
        if let Some(user) = get(ENV_USER) {
            self.username = Some(user);
        }
        if let Some(pass) = get(ENV_PASSWORD) {
            self.password = Some(pass);
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS).and_then(|s| s.parse().ok()) {
            self.timeout_secs = Some(secs);
        }
    }
}

impl fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletConfig")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("login_file", &self.login_file)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for WalletConfig {
    fn default() -> Self { Self::new(DEFAULT_ENDPOINT) }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load the configuration at [`Config::default_path`], then apply the
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }
        let mut config = Self::from_file(&path)?;
        config.wallet.apply_env();
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/walletrpc/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir =
            dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("walletrpc");
        Ok(config_dir.join("config.toml"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { wallet: WalletConfig::default(), logging: LoggingConfig::default() }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use serial_test::serial;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_from_file() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        let toml_content = r#"
            [wallet]
            endpoint = "http://10.0.0.5:18083/json_rpc"
            username = "rpcuser"
            password = "rpcpassword"
            timeout_secs = 15

            [logging]
            level = "debug"
            file = "wallet.log"
        "#;
        fs::write(&temp_file, toml_content)
            .expect("Failed to write TOML content to temporary file");

        let loaded =
            Config::from_file(&temp_file).expect("Failed to load config from temporary file");
        assert_eq!(loaded.wallet.endpoint, "http://10.0.0.5:18083/json_rpc");
        assert_eq!(loaded.wallet.credentials(), Some(("rpcuser", "rpcpassword")));
        assert_eq!(loaded.wallet.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(loaded.wallet.login_file, None);
        assert_eq!(loaded.logging.level, "debug");
        assert_eq!(loaded.logging.file, Some(PathBuf::from("wallet.log")));

        // Logging section is optional
        let temp_file2 = NamedTempFile::new().expect("Failed to create second temporary file");
        fs::write(&temp_file2, "[wallet]\nendpoint = \"127.0.0.1:18082\"\n")
            .expect("Failed to write second TOML content");
        let loaded2 = Config::from_file(&temp_file2).expect("Failed to load minimal config");
        assert_eq!(loaded2.wallet.endpoint, "127.0.0.1:18082");
        assert_eq!(loaded2.wallet.credentials(), None);
        assert_eq!(loaded2.logging, LoggingConfig::default());

        // Test file not found error
        let result = Config::from_file("nonexistent_file.toml");
        match result.expect_err("Expected error for nonexistent file") {
            ConfigError::FileRead(_) => {}
            _ => panic!("Expected FileRead error"),
        }

        // Test parse error
        let temp_file =
            NamedTempFile::new().expect("Failed to create temporary file for parse error test");
        fs::write(&temp_file, "invalid toml content")
            .expect("Failed to write invalid TOML content");
        match Config::from_file(&temp_file).expect_err("Expected parse error for invalid TOML") {
            ConfigError::Parse(_) => {}
            _ => panic!("Expected Parse error"),
        }
    }

    #[test]
    fn test_save() {
        let mut config = Config::default();
        config.wallet.username = Some("alice".to_string());
        let temp_file =
            NamedTempFile::new().expect("Failed to create temporary file for save test");

        config.save(&temp_file).expect("save");

        let contents = fs::read_to_string(&temp_file).expect("Failed to read saved config file");
        assert!(contents.contains(DEFAULT_ENDPOINT));
        assert!(contents.contains("alice"));
        assert!(!contents.contains("password"));

        let reloaded = Config::from_file(&temp_file).expect("reload");
        assert_eq!(reloaded, config);

        let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let non_existent_subdir = temp_dir.path().join("nonexistent").join("config.toml");
        match config.save(&non_existent_subdir).expect_err("Expected file write error") {
            ConfigError::FileRead(_) => (),
            other => panic!("Expected FileRead error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_path() {
        let path = Config::default_path().expect("Failed to get default config path");
        let path_str = path.to_str().expect("Path should be valid UTF-8");
        assert!(path_str.contains("walletrpc"));
        assert!(path_str.ends_with("config.toml"));
    }

    #[test]
    fn test_apply_env_internal() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_URL, "http://wallet.local:28088/json_rpc"),
            (ENV_USER, "bob"),
            (ENV_PASSWORD, "pw"),
            (ENV_TIMEOUT_SECS, "not-a-number"),
        ]);
        let mut wallet = WalletConfig::default();
        wallet.timeout_secs = Some(9);
        wallet.apply_env_internal(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(wallet.endpoint, "http://wallet.local:28088/json_rpc");
        assert_eq!(wallet.credentials(), Some(("bob", "pw")));
        assert_eq!(wallet.timeout_secs, Some(9));
    }

    #[test]
    #[serial]
    fn test_apply_env() {
        std::env::set_var(ENV_TIMEOUT_SECS, "42");
        std::env::remove_var(ENV_URL);
        let mut wallet = WalletConfig::default();
        wallet.apply_env();
        std::env::remove_var(ENV_TIMEOUT_SECS);

        assert_eq!(wallet.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(wallet.timeout(), Some(Duration::from_secs(42)));
    }

    #[test]
    fn test_debug_redacts_password() {
        let mut config = Config::default();
        config.wallet.username = Some("rpcuser".to_string());
        config.wallet.password = Some("s3cretpw".to_string());

        let shown = format!("{:?}", config);
        assert!(shown.contains("rpcuser"));
        assert!(shown.contains("<redacted>"));
        assert!(!shown.contains("s3cretpw"));
    }

    #[test]
    fn test_partial_credentials() {
        let mut wallet = WalletConfig::default();
        assert!(!wallet.has_partial_credentials());

        wallet.username = Some("rpcuser".to_string());
        assert!(wallet.has_partial_credentials());
        assert_eq!(wallet.credentials(), None);

        wallet.password = Some("pw".to_string());
        assert!(!wallet.has_partial_credentials());
    }

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.wallet.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.wallet.credentials(), None);
        assert_eq!(config.wallet.timeout(), None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, None);
    }
}
