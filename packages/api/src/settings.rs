//! Layered client settings.
//!
//! Native builds resolve [`StorefrontConfig`] from, lowest precedence first:
//! built-in defaults, an optional `storefront.toml`, then `STOREFRONT__*`
//! environment variables (`STOREFRONT__API__BASE_URL`,
//! `STOREFRONT__STORAGE__NAMESPACE`, ...).
//!
//! Browser builds have no filesystem or process environment; they use the
//! defaults, with the base URL optionally baked in at compile time through
//! `STOREFRONT_API_BASE_URL`.

use store::StorefrontConfig;

#[cfg(not(target_arch = "wasm32"))]
pub use native::{load, load_from};

#[cfg(target_arch = "wasm32")]
pub fn load() -> StorefrontConfig {
    match option_env!("STOREFRONT_API_BASE_URL") {
        Some(url) if !url.trim().is_empty() => StorefrontConfig::new(url),
        _ => StorefrontConfig::default(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;

    use config::{Config, ConfigError, Environment, File, FileFormat};
    use store::StorefrontConfig;

    /// Load settings using `storefront.toml` from the working directory.
    pub fn load() -> Result<StorefrontConfig, ConfigError> {
        load_from(StorefrontConfig::filename())
    }

    /// Load settings with an explicit config file path. The file may be absent.
    pub fn load_from(path: impl AsRef<Path>) -> Result<StorefrontConfig, ConfigError> {
        let defaults = StorefrontConfig::default();
        let path = path.as_ref().to_string_lossy().into_owned();
        let config = Config::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .add_source(File::with_name(&path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("STOREFRONT").separator("__"))
            .build()?;

        let settings: StorefrontConfig = config.try_deserialize()?;
        tracing::debug!(base_url = %settings.api.base_url, "Loaded settings");
        Ok(settings)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::env::{remove_var, set_var};
    use std::io::Write;

    #[test]
    fn test_settings_layering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[api]\nbase_url = \"https://file.example.com/api\"\n[storage]\nnamespace = \"shop\"").unwrap();

        let settings = load_from(&path).unwrap();
        assert_eq!(settings.api.base_url, "https://file.example.com/api");
        assert_eq!(settings.namespace(), Some("shop"));

        set_var("STOREFRONT__API__BASE_URL", "https://env.example.com/api");
        let settings = load_from(&path).unwrap();
        remove_var("STOREFRONT__API__BASE_URL");
        assert_eq!(settings.api.base_url, "https://env.example.com/api");
        assert_eq!(settings.namespace(), Some("shop"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings.storage, StorefrontConfig::default().storage);
    }
}
