//! # Durable key/value persistence
//!
//! The session and the cart are both persisted as small JSON documents under
//! fixed keys. [`KeyValueStore`] is the seam between that logic and the place
//! the bytes actually live:
//!
//! | Backend | Platform | Where |
//! |---------|----------|-------|
//! | [`crate::MemoryStore`] | tests, fallback | process memory |
//! | [`crate::FileStore`] | desktop / native | one file per key under a data directory |
//! | `LocalStorage` | browser (`web` feature) | `window.localStorage` |
//!
//! The trait is synchronous on purpose: every cart mutation persists before it
//! returns, and browser `localStorage` is itself synchronous.
//!
//! ## Error handling
//!
//! Implementations swallow I/O failures (reads return `None`, writes do
//! nothing). A broken storage backend degrades to "nothing persisted" rather
//! than taking the UI down; the authoritative data lives on the backend.

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key for the signed-in user's profile JSON.
pub const USER_KEY: &str = "user";
/// Storage key for the cart line items JSON.
pub const CART_KEY: &str = "cart";

/// Synchronous string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Prefix `key` with an optional namespace: `Some("shop")` + `"cart"` → `"shop:cart"`.
pub fn scoped_key(namespace: Option<&str>, key: &str) -> String {
    match namespace {
        Some(ns) if !ns.is_empty() => format!("{ns}:{key}"),
        _ => key.to_string(),
    }
}
