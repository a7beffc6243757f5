//! Shared storage constructor for all platforms.
//!
//! Returns the [`store::KeyValueStore`] the employee directory and the login guard
//! persist into:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStore`]
//! - **Desktop** (native): one JSON file per key via [`store::FileStore`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type Backend = store::LocalStore;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type Backend = store::FileStore;

/// Create the platform-appropriate backend.
///
/// On desktop the files live under `<data_dir>/ems/`.
pub fn make_backend() -> Backend {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::FileStore::new(data_dir())
    }
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn data_dir() -> std::path::PathBuf {
    #[cfg(not(target_arch = "wasm32"))]
    let base = dirs::data_dir();
    #[cfg(target_arch = "wasm32")]
    let base: Option<std::path::PathBuf> = None;

    base.unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("ems")
}
