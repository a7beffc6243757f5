//! # Demo login guard
//!
//! [`Authenticator`] checks an email/password pair against the single configured
//! credential pair and persists a [`Session`] under the auth key on success. The
//! persisted session is the "authenticated" flag: routes other than the login page
//! are only reachable while it is present.
//!
//! This is a local demo gate, not a security boundary. The credentials ship with
//! the app and the session is plain text in the browser's storage.
//!
//! ## Stored value
//!
//! | Stored | Read as |
//! |--------|---------|
//! | `{"email": "...", "name": "..."}` | that session |
//! | `true` / `"true"` | session for the configured user |
//! | anything else, or absent | signed out |

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::kv::KeyValueStore;

/// The signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub name: String,
}

impl Session {
    /// Single letter shown in the header avatar.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .chain(self.email.chars())
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('A')
    }
}

/// Login guard over a [`KeyValueStore`].
#[derive(Clone)]
pub struct Authenticator<S: KeyValueStore> {
    backend: S,
    key: String,
    config: AuthConfig,
}

impl<S: KeyValueStore> Authenticator<S> {
    pub fn new(backend: S, key: impl Into<String>, config: AuthConfig) -> Self {
        Self {
            backend,
            key: key.into(),
            config,
        }
    }

    /// Check `email`/`password`; on success persist and return the session.
    ///
    /// Both fields must match the configured credentials exactly. A failed attempt
    /// leaves any stored state untouched.
    pub fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email != self.config.email || password != self.config.password {
            tracing::info!("rejected login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let session = self.configured_session();
        match serde_json::to_string(&session) {
            Ok(encoded) => {
                if let Err(err) = self.backend.set(&self.key, &encoded) {
                    tracing::warn!(error = %err, "session will not survive a reload");
                }
            }
            Err(err) => tracing::warn!(error = %err, "failed to encode session"),
        }
        tracing::info!(email = %session.email, "signed in");
        Ok(session)
    }

    pub fn logout(&self) {
        if let Err(err) = self.backend.remove(&self.key) {
            tracing::warn!(error = %err, "failed to clear session");
        }
        tracing::info!("signed out");
    }

    /// The persisted session, if any.
    pub fn current_user(&self) -> Option<Session> {
        let raw = self.backend.get(&self.key)?;
        match serde_json::from_str::<Value>(&raw).ok()? {
            Value::Bool(true) => Some(self.configured_session()),
            Value::String(s) if s == "true" => Some(self.configured_session()),
            value @ Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    fn configured_session(&self) -> Session {
        Session {
            email: self.config.email.clone(),
            name: self.config.display_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    const KEY: &str = "ems_auth";

    fn guard(store: &MemoryStore) -> Authenticator<MemoryStore> {
        Authenticator::new(store.clone(), KEY, AuthConfig::default())
    }

    #[test]
    fn test_demo_credentials_sign_in() {
        let store = MemoryStore::new();
        let auth = guard(&store);
        assert!(!auth.is_authenticated());

        let session = auth.login("admin@ems.com", "admin123").unwrap();
        assert_eq!(session.email, "admin@ems.com");
        assert_eq!(session.name, "Admin");
        assert_eq!(session.initial(), 'A');

        // Flag survives a "reload"
        assert_eq!(guard(&store).current_user(), Some(session));
    }

    #[test]
    fn test_wrong_credentials_set_no_flag() {
        let store = MemoryStore::new();
        let auth = guard(&store);

        assert_eq!(auth.login("admin@ems.com", "Admin123"), Err(AuthError::InvalidCredentials));
        assert_eq!(auth.login("root@ems.com", "admin123"), Err(AuthError::InvalidCredentials));
        assert_eq!(auth.login("", ""), Err(AuthError::InvalidCredentials));
        assert_eq!(auth.login("ADMIN@EMS.COM", "admin123"), Err(AuthError::InvalidCredentials));
        assert_eq!(auth.login(" admin@ems.com", "admin123"), Err(AuthError::InvalidCredentials));
        assert!(!auth.is_authenticated());
        assert!(store.get(KEY).is_none());
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_logout_clears_flag() {
        let store = MemoryStore::new();
        let auth = guard(&store);
        auth.login("admin@ems.com", "admin123").unwrap();
        auth.logout();
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_legacy_and_corrupt_values() {
        let store = MemoryStore::new();
        let auth = guard(&store);

        store.set(KEY, "true").unwrap();
        assert_eq!(auth.current_user().unwrap().name, "Admin");

        store.set(KEY, "\"true\"").unwrap();
        assert!(auth.is_authenticated());

        for corrupt in ["false", "{oops", "42", "{\"email\": 1}"] {
            store.set(KEY, corrupt).unwrap();
            assert!(!auth.is_authenticated(), "{corrupt} should read as signed out");
        }
    }

    #[test]
    fn test_initial_falls_back() {
        let session = Session {
            email: String::new(),
            name: "  ".to_string(),
        };
        assert_eq!(session.initial(), 'A');
        let session = Session {
            email: "zoe@ems.com".to_string(),
            name: String::new(),
        };
        assert_eq!(session.initial(), 'Z');
    }
}
