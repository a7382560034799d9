//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used on desktop builds so the session
//! and cart survive restarts, the same way the browser build uses
//! `localStorage`.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── authToken.json
//! ├── user.json
//! └── cart.json
//! ```
//!
//! Characters outside `[A-Za-z0-9._-]` in a key are replaced with `_` so a
//! namespaced key such as `shop:cart` maps to `shop_cart.json` on every
//! platform.
//!
//! ## Platform data directories
//!
//! The app picks the base in `ui::platform::make_storage`, under the
//! platform data directory:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/storefront/` |
//! | Linux | `~/.local/share/storefront/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\storefront\` |

use std::path::{Path, PathBuf};

use crate::storage::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base.join(format!("{file}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!(dir = %self.base.display(), "Failed to create storage dir: {}", e);
            return;
        }
        if let Err(e) = std::fs::write(self.entry_path(key), value) {
            tracing::warn!(key, "Failed to persist entry: {}", e);
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}
