//! Platform glue: which storage backend persists the session and cart, and
//! how the app gets back to the login view.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage`
//! - **Native**: a directory of JSON files under the user's data dir
//! - **WASM without `web`**: in-memory only

use store::StorefrontConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type Storage = store::LocalStorage;

#[cfg(not(target_arch = "wasm32"))]
pub type Storage = store::FileStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type Storage = store::MemoryStore;

/// Create the storage backend for this platform.
pub fn make_storage(config: &StorefrontConfig) -> Storage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let _ = config;
        store::LocalStorage
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = match &config.storage.data_dir {
            Some(dir) => std::path::PathBuf::from(dir),
            None => dirs::data_dir()
                .unwrap_or_else(|| std::path::PathBuf::from("."))
                .join("storefront"),
        };
        store::FileStore::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        let _ = config;
        store::MemoryStore::new()
    }
}

/// Load client settings, falling back to defaults when they cannot be read.
pub fn load_config() -> StorefrontConfig {
    #[cfg(target_arch = "wasm32")]
    {
        api::settings::load()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        api::settings::load().unwrap_or_else(|e| {
            tracing::error!("Failed to load settings, using defaults: {}", e);
            StorefrontConfig::default()
        })
    }
}

/// Full navigation to `/login`. A page load also re-reads persisted state,
/// so every view starts from the torn-down session.
pub fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("Sign-in required");
    }
}

/// Wait without blocking the UI thread.
pub async fn sleep(duration: std::time::Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_from_config() {
        let mut config = StorefrontConfig::default();
        config.storage.data_dir = Some("/tmp/storefront-test".to_string());
        let storage = make_storage(&config);
        assert_eq!(storage.base(), std::path::Path::new("/tmp/storefront-test"));
    }
}
