//! # Shared domain models
//!
//! Types that both the persisted client state and the API layer speak. They
//! mirror the backend's JSON (camelCase fields, SCREAMING_SNAKE_CASE enums) so
//! the same value can be decoded from a response and written to storage.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | Account role: `ADMIN`, `SELLER` or `CUSTOMER`. |
//! | [`UserProfile`] | The signed-in user's identity as returned at login, minus the token. |
//! | [`Product`] | A catalogue entry. `quantity` is stock on hand, not a cart quantity. |
//! | [`Category`] | A product category. |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role granted by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Seller,
    Customer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Seller, Role::Customer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Seller => "SELLER",
            Role::Customer => "CUSTOMER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "SELLER" => Ok(Role::Seller),
            "CUSTOMER" => Ok(Role::Customer),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

/// Profile of the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl UserProfile {
    /// "First Last", falling back to the email when both names are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

/// A catalogue product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// Units in stock.
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// A product category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        let role: Role = serde_json::from_str("\"CUSTOMER\"").unwrap();
        assert_eq!(role, Role::Customer);
        assert_eq!("seller".parse::<Role>().unwrap(), Role::Seller);
        assert!("OWNER".parse::<Role>().is_err());
    }

    #[test]
    fn test_product_from_backend_json() {
        let json = r#"{"id":7,"name":"Lamp","price":19.5,"quantity":3,"categoryName":"Home"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.category_name.as_deref(), Some("Home"));
        assert!(product.in_stock());
        assert!(product.description.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = UserProfile {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Customer,
        };
        assert_eq!(user.display_name(), "Ada Lovelace");

        user.first_name.clear();
        user.last_name = "  ".to_string();
        assert_eq!(user.display_name(), "ada@example.com");
    }
}
