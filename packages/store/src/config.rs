//! # Client configuration — `storefront.toml`
//!
//! Settings the storefront client needs before it can talk to anything: where
//! the backend lives and how local state is stored.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080/api"
//!
//! [storage]
//! namespace = "shop"        # optional key prefix, e.g. "shop:cart"
//! data_dir = "/var/lib/x"   # optional, native builds only
//! ```
//!
//! All structs derive `Default` (with production defaults) so a missing or
//! empty file is equivalent to the default configuration. Layering with the
//! environment happens in the `api` crate's settings loader.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `storefront.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Local persistence settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Prefix for persisted keys. Empty or absent means unprefixed keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Directory for the file-backed store on native builds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
}

impl StorefrontConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            storage: StorageConfig::default(),
        }
    }

    /// Builder method to set the storage namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.storage.namespace = Some(namespace.into());
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "storefront.toml"
    }

    /// The namespace, treating an empty string as none.
    pub fn namespace(&self) -> Option<&str> {
        self.storage.namespace.as_deref().filter(|ns| !ns.is_empty())
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
