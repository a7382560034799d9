//! # Storefront client state
//!
//! Everything the storefront keeps on the client: the signed-in
//! [`Session`], the shopping [`Cart`], the shared catalogue models and the
//! client configuration. Both stores persist through the [`KeyValueStore`]
//! seam so the same logic runs against browser `localStorage`, a data
//! directory on desktop, or memory in tests.

pub mod cart;
pub mod config;
pub mod models;
pub mod session;
pub mod storage;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use cart::{Cart, CartItem};
pub use config::StorefrontConfig;
pub use models::{Category, Product, Role, UserProfile};
pub use session::{ProfileUpdate, Session, SessionError, SessionStore};
pub use storage::KeyValueStore;
