//! Request and response bodies for the backend endpoints.

mod catalog;
mod inventory;
mod order;
mod performance;
mod user;

pub use catalog::{CategoryRequest, ProductQuery, ProductRequest};
pub use inventory::{InventoryRecord, InventoryRequest, InventoryUpdate};
pub use order::{Order, OrderItem, OrderLine, OrderRequest, OrderStatus, OrderStatusUpdate};
pub use performance::{CacheMetric, CacheMetrics, DbMetric, DbMetrics};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, UserSummary, UserUpdate};
