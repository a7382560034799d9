//! # API crate: typed access to the storefront backend
//!
//! Every view talks to the backend through [`ApiClient`]. The backend is an
//! external REST service whose responses all share the `{ data, message }`
//! envelope; this crate turns those into typed values and an [`ApiError`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient`, bearer token attachment, status classification, the 401 sign-out |
//! | [`envelope`] | `Envelope`, `Page`, `PageRequest` |
//! | [`error`] | `ApiError` |
//! | [`models`] | Request and response bodies for orders, inventory, users and the catalogue |
//! | [`settings`] | Layered loading of `StorefrontConfig` |
//!
//! Endpoint groups are added to `ApiClient` as inherent methods:
//!
//! - **Account**: `login`, `register`, `logout`, `profile`, `update_profile`
//! - **Catalogue**: `products`, `product`, `categories`, `category`, and admin CRUD
//! - **Orders**: `place_order`, `create_order`, `my_orders`, `all_orders`, `order`,
//!   `update_order_status`, `delete_order`
//! - **Inventory**: `inventory`, `inventory_record`, `inventory_for_product`,
//!   `create_inventory`, `update_inventory`, `adjust_inventory`, `delete_inventory`
//! - **Users**: `users`, `user`, `update_user`, `delete_user`
//! - **Performance**: `db_metrics`, `cache_metrics`, `clear_metrics`

pub mod client;
pub mod envelope;
pub mod error;
pub mod models;
pub mod settings;

mod account;
mod inventory;
mod orders;
mod performance;
mod products;
mod users;

pub use client::{ApiClient, Call, UnauthorizedHook};
pub use envelope::{Envelope, Page, PageRequest};
pub use error::ApiError;
pub use models::*;

pub use store::{Category, Product, ProfileUpdate, Role, Session, UserProfile};
