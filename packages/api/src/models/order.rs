use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use store::{Cart, KeyValueStore};

/// Fulfilment state of an order, as tracked by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown order status: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub product_id: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: u32,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One requested line of a new order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: i64,
    pub quantity: u32,
}

/// Body for `POST /orders/create`. Prices are not sent; the backend prices
/// the order from its own catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    pub items: Vec<OrderLine>,
}

impl OrderRequest {
    pub fn from_cart<S: KeyValueStore>(cart: &Cart<S>) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| OrderLine {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Body for `PUT /orders/update/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, Product};

    #[test]
    fn test_order_request_from_cart() {
        let mut cart = Cart::new(MemoryStore::new(), None);
        let product = Product {
            id: 9,
            name: "Kettle".to_string(),
            price: 30.0,
            quantity: 5,
            category_name: None,
            description: None,
            sku: None,
        };
        cart.add(&product, 2);

        let request = OrderRequest::from_cart(&cart);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"items": [{"productId": 9, "quantity": 2}]})
        );
    }

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!("shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert_eq!(OrderStatus::Cancelled.to_string(), "CANCELLED");
        assert!("LOST".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_order_from_backend_json() {
        let json = r#"{
            "id": 1, "userId": 2, "userName": "Ann", "totalAmount": 59.5, "status": "PENDING",
            "items": [{"id": 10, "productId": 3, "productName": "Mug", "quantity": 2, "totalPrice": 19.0}],
            "createdAt": "2026-01-19T10:30:00"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items[0].product_name.as_deref(), Some("Mug"));
        assert!(order.updated_at.is_none());
    }
}
