//! # Application configuration (`Ems.toml`)
//!
//! The launchers embed an `Ems.toml` at build time and parse it with
//! [`EmsConfig::load_or_default`]. Every section and field has a default, so a
//! missing, partial or broken file still yields a working configuration.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! employees_key = "employees"   # localStorage key of the employee collection
//! auth_key = "ems_auth"         # localStorage key of the login session
//!
//! [auth]
//! email = "admin@ems.com"
//! password = "admin123"
//! display_name = "Admin"
//! login_delay_ms = 800          # artificial delay before credentials are checked
//!
//! [images]
//! max_bytes = 2097152           # largest accepted photo upload
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration stored in `Ems.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmsConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub images: ImageConfig,
}

/// Keys under which state is persisted.
///
/// Keys may only contain ASCII letters, digits, `-` and `_`, and the two keys must
/// differ. The desktop backend names one file per key, so anything else could
/// make two keys share a file. [`EmsConfig::load_or_default`] replaces a section
/// that breaks this with the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub employees_key: String,
    pub auth_key: String,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for key in [&self.employees_key, &self.auth_key] {
            if !is_valid_key(key) {
                return Err(ConfigError::InvalidKey(key.clone()));
            }
        }
        if self.employees_key == self.auth_key {
            return Err(ConfigError::SharedKey(self.auth_key.clone()));
        }
        Ok(())
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            employees_key: "employees".to_string(),
            auth_key: "ems_auth".to_string(),
        }
    }
}

/// The demo credential pair and login behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub email: String,
    pub password: String,
    /// Name shown for the signed-in user.
    pub display_name: String,
    pub login_delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            email: "admin@ems.com".to_string(),
            password: "admin123".to_string(),
            display_name: "Admin".to_string(),
            login_delay_ms: 800,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub max_bytes: usize,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

impl EmsConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "Ems.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse `s`, logging and falling back to defaults when it is invalid.
    ///
    /// A `[storage]` section with unusable keys is replaced on its own; the other
    /// sections are kept.
    pub fn load_or_default(s: &str) -> Self {
        let mut config = Self::from_toml(s).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "invalid {}, using defaults", Self::filename());
            Self::default()
        });
        if let Err(err) = config.storage.validate() {
            tracing::warn!(error = %err, "invalid [storage] section, using default keys");
            config.storage = StorageConfig::default();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = EmsConfig::from_toml("").unwrap();
        assert_eq!(config, EmsConfig::default());
        assert_eq!(config.storage.employees_key, "employees");
        assert_eq!(config.auth.email, "admin@ems.com");
        assert_eq!(config.auth.login_delay_ms, 800);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = EmsConfig::from_toml("[auth]\nlogin_delay_ms = 0\n").unwrap();
        assert_eq!(config.auth.login_delay_ms, 0);
        assert_eq!(config.auth.password, "admin123");
        assert_eq!(config.images.max_bytes, 2 * 1024 * 1024);
    }

    #[test]
    fn test_roundtrip() {
        let mut config = EmsConfig::default();
        config.storage.auth_key = "session".to_string();
        let loaded = EmsConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_default_keys_are_valid() {
        assert_eq!(StorageConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_colliding_keys_are_replaced() {
        // `ems.auth` and `ems_auth` would land in the same file on desktop
        let dotted = EmsConfig::load_or_default("[storage]\nemployees_key = \"ems.auth\"\n");
        assert_eq!(dotted.storage, StorageConfig::default());

        let shared = EmsConfig::load_or_default(
            "[storage]\nemployees_key = \"state\"\nauth_key = \"state\"\n\n[auth]\nlogin_delay_ms = 0\n",
        );
        assert_eq!(shared.storage, StorageConfig::default());
        assert_eq!(shared.auth.login_delay_ms, 0);

        let parsed = EmsConfig::from_toml("[storage]\nauth_key = \"\"\n").unwrap();
        assert_eq!(
            parsed.storage.validate(),
            Err(ConfigError::InvalidKey(String::new()))
        );
    }

    #[test]
    fn test_custom_valid_keys_are_kept() {
        let config = EmsConfig::load_or_default(
            "[storage]\nemployees_key = \"staff-v2\"\nauth_key = \"session_v2\"\n",
        );
        assert_eq!(config.storage.employees_key, "staff-v2");
        assert_eq!(config.storage.auth_key, "session_v2");
    }

    #[test]
    fn test_invalid_falls_back() {
        assert_eq!(EmsConfig::load_or_default("[auth\nbroken"), EmsConfig::default());
    }
}
