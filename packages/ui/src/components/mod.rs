//! Components shared by the storefront views.

mod banner;
mod navbar;
mod pager;
mod product_card;

pub use banner::{ErrorBanner, SuccessBanner};
pub use navbar::{CartBadge, Navbar};
pub use pager::Pager;
pub use product_card::{ProductCard, StatusBadge};
