use std::path::PathBuf;
use std::str::FromStr;

const HOST: &str = "127.0.0.1";
const PORT: u16 = 8080;
const STORAGE_PATH: &str = "data/local_storage.json";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("STORAGE_BACKEND must be one of file, memory, none (got {0:?})")]
    UnknownStorageBackend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
    Disabled,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            "none" | "disabled" => Ok(StorageBackend::Disabled),
            _ => Err(ConfigError::UnknownStorageBackend(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: PathBuf::from(STORAGE_PATH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
    /// Origin allowed to call the API. Any origin when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            storage: StorageConfig::default(),
            cors_allowed_origin: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let backend = match std::env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.storage.backend,
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            storage: StorageConfig {
                backend,
                path: std::env::var("STORAGE_PATH")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.storage.path),
            },
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|s| !s.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "HOST",
        "PORT",
        "STORAGE_BACKEND",
        "STORAGE_PATH",
        "CORS_ALLOWED_ORIGIN",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn defaults_without_environment() {
        clear_env();

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::File);
    }

    #[test]
    #[serial]
    fn reads_overrides_and_ignores_bad_port() {
        clear_env();
        std::env::set_var("HOST", "0.0.0.0");
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("STORAGE_BACKEND", "Memory");
        std::env::set_var("STORAGE_PATH", "/tmp/sakuyado.json");
        std::env::set_var("CORS_ALLOWED_ORIGIN", "http://localhost:3000");

        let config = AppConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.path, PathBuf::from("/tmp/sakuyado.json"));
        assert_eq!(config.cors_allowed_origin.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    #[serial]
    fn unknown_backend_is_an_error() {
        clear_env();
        std::env::set_var("STORAGE_BACKEND", "redis");

        let result = AppConfig::from_env();
        clear_env();

        assert_eq!(
            result,
            Err(ConfigError::UnknownStorageBackend("redis".to_string()))
        );
    }
}
