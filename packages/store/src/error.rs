use thiserror::Error;

/// Failures of a [`crate::KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Login failure. The message never says which half was wrong.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Rejected thumbnail uploads.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("Could not read the selected file")]
    Unreadable,
    #[error("Please choose an image file")]
    NotAnImage,
    #[error("Image is too large (max {max_kb} KB)")]
    TooLarge { max_kb: usize },
}

/// `[storage]` keys that the backends cannot keep apart.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("storage key `{0}` must be non-empty ASCII letters, digits, `-` or `_`")]
    InvalidKey(String),
    #[error("employees_key and auth_key must differ (both `{0}`)")]
    SharedKey(String),
}
