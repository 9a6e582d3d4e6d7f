//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every section has defaults so an empty file is valid.

pub mod identity;
pub mod logging;
pub mod session;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::identity::{IdentityConfig, SeedUser};
pub use self::logging::LoggingConfig;
pub use self::session::SessionConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Durable session storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Session restore settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Identity catalog seed data.
    #[serde(default)]
    pub identity: IdentityConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Values are overlaid with environment variables
    /// prefixed with `AVDESK__` (e.g. `AVDESK__STORAGE__PROVIDER=memory`).
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("AVDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = AppConfig::load(path.to_str().unwrap()).unwrap();

        assert_eq!(config.storage.provider, "file");
        assert_eq!(config.logging.format, "pretty");
        assert!(!config.session.verify_identity_on_restore);
        assert!(config.identity.users.is_empty());
    }

    #[test]
    fn test_load_seed_users() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.toml");
        std::fs::write(
            &path,
            r#"
[storage]
provider = "memory"

[session]
verify_identity_on_restore = true

[[identity.users]]
id = "u1"
username = "ana"
display_name = "Ana"
role = "admin"
password = "secret"
"#,
        )
        .unwrap();

        let config = AppConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.storage.provider, "memory");
        assert!(config.session.verify_identity_on_restore);
        assert_eq!(config.identity.users.len(), 1);

        let ana = &config.identity.users[0];
        assert_eq!(ana.username, "ana");
        assert_eq!(ana.role, "admin");
        assert_eq!(ana.password.as_deref(), Some("secret"));
        assert!(ana.password_hash.is_none());
    }

    #[test]
    fn test_seed_debug_redacts_password() {
        let seed = SeedUser {
            id: "u1".into(),
            username: "ana".into(),
            display_name: "Ana".into(),
            role: "admin".into(),
            password: Some("hunter2".into()),
            password_hash: None,
        };
        let rendered = format!("{seed:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
