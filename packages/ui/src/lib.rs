//! Shared UI for the storefront: application state, platform glue, view
//! helpers and components.

pub mod catalog;
pub mod components;
pub mod format;
pub mod forms;
pub mod pending;
pub mod platform;

mod state;
pub use state::{use_cart, use_session, AppProvider, CartHandle, Client, SessionHandle};

pub use components::{CartBadge, ErrorBanner, Navbar, Pager, ProductCard, StatusBadge, SuccessBanner};
pub use pending::{use_submit_guard, SubmitGuard};
