//! # Shopping cart
//!
//! [`Cart`] is the client-side list of [`CartItem`]s. It is owned by the
//! browser session, persisted independently of the signed-in user, and never
//! talks to the backend: the price of a line is the catalogue price at the
//! moment the product was first added.
//!
//! Invariants held after every operation:
//!
//! - a product id appears at most once;
//! - every quantity is a positive integer;
//! - the full item list has been written to storage before the mutating call
//!   returns.
//!
//! Totals are computed from stored prices without rounding. Rounding to cents
//! is a presentation concern.

use serde::{Deserialize, Serialize};

use crate::models::Product;
use crate::storage::{scoped_key, KeyValueStore, CART_KEY};

/// One product-plus-quantity entry in the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(alias = "id")]
    pub product_id: i64,
    pub name: String,
    /// Unit price captured when the product was added.
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub category_name: Option<String>,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    fn is_valid(&self) -> bool {
        self.quantity > 0 && self.price.is_finite() && self.price >= 0.0
    }
}

/// Persisted shopping cart.
#[derive(Clone, Debug)]
pub struct Cart<S> {
    storage: S,
    key: String,
    items: Vec<CartItem>,
}

impl<S: KeyValueStore> Cart<S> {
    /// An empty cart that will persist under the (optionally namespaced) cart key.
    /// Does not read storage; see [`restore`](Self::restore).
    pub fn new(storage: S, namespace: Option<&str>) -> Self {
        Self {
            storage,
            key: scoped_key(namespace, CART_KEY),
            items: Vec::new(),
        }
    }

    /// Load the persisted cart. Malformed entries are dropped; an unreadable
    /// document yields an empty cart.
    pub fn restore(storage: S, namespace: Option<&str>) -> Self {
        let mut cart = Self::new(storage, namespace);
        let Some(raw) = cart.storage.get(&cart.key) else {
            return cart;
        };

        let (items, discarded) = parse_items(&raw);
        cart.items = items;
        if discarded > 0 {
            tracing::warn!(discarded, "Dropped malformed cart entries");
            cart.persist();
        }
        cart
    }

    /// Add `quantity` units of `product`. Repeat adds accumulate on the
    /// existing line. Returns `false` (and changes nothing) when the resulting
    /// quantity would be non-positive or out of range.
    pub fn add(&mut self, product: &Product, quantity: i64) -> bool {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let Some(next) = positive_quantity(i64::from(item.quantity).saturating_add(quantity))
            else {
                return false;
            };
            item.quantity = next;
        } else {
            let Some(quantity) = positive_quantity(quantity) else {
                return false;
            };
            if !product.price.is_finite() || product.price < 0.0 {
                tracing::warn!(product_id = product.id, "Refusing product with invalid price");
                return false;
            }
            self.items.push(CartItem {
                product_id: product.id,
                name: product.name.clone(),
                price: product.price,
                quantity,
                category_name: product.category_name.clone(),
            });
        }
        self.persist();
        true
    }

    /// Set a line's quantity exactly. Zero or less removes the line. Returns
    /// `false` when the product is not in the cart.
    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) -> bool {
        let Some(index) = self.items.iter().position(|i| i.product_id == product_id) else {
            return false;
        };
        if quantity <= 0 {
            self.items.remove(index);
        } else {
            self.items[index].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        self.persist();
        true
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        if self.items.len() == before {
            return false;
        }
        self.persist();
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Sum of price × quantity over all lines.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .fold(0.0, |total, item| total + item.line_total())
    }

    /// Sum of quantities (the badge number), not the number of lines.
    pub fn count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: i64) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) {
        if self.items.is_empty() {
            self.storage.set(&self.key, "[]");
            return;
        }
        match serde_json::to_string(&self.items) {
            Ok(json) => self.storage.set(&self.key, &json),
            Err(e) => tracing::warn!("Failed to serialise cart: {}", e),
        }
    }
}

fn positive_quantity(quantity: i64) -> Option<u32> {
    if quantity <= 0 {
        return None;
    }
    u32::try_from(quantity).ok()
}

/// Parse a persisted item list, keeping only well-formed, unique lines.
/// Returns the items and how many entries were dropped.
fn parse_items(raw: &str) -> (Vec<CartItem>, usize) {
    let entries = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Array(entries)) => entries,
        Ok(_) | Err(_) => return (Vec::new(), 1),
    };

    let total = entries.len();
    let mut items: Vec<CartItem> = Vec::with_capacity(total);
    for entry in entries {
        let Ok(item) = serde_json::from_value::<CartItem>(entry) else {
            continue;
        };
        if item.is_valid() && !items.iter().any(|i| i.product_id == item.product_id) {
            items.push(item);
        }
    }
    let discarded = total - items.len();
    (items, discarded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn product(id: i64, price: f64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            price,
            quantity: 100,
            category_name: Some("Garden".to_string()),
            description: None,
            sku: None,
        }
    }

    fn empty_cart() -> (MemoryStore, Cart<MemoryStore>) {
        let storage = MemoryStore::new();
        let cart = Cart::restore(storage.clone(), None);
        (storage, cart)
    }

    #[test]
    fn test_repeat_add_accumulates() {
        let (_, mut cart) = empty_cart();
        assert!(cart.add(&product(1, 4.0), 2));
        assert!(cart.add(&product(1, 4.0), 3));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(1).unwrap().quantity, 5);
        assert_eq!(cart.count(), 5);
        assert_eq!(cart.total(), 20.0);
    }

    #[test]
    fn test_price_is_snapshotted_at_add_time() {
        let (_, mut cart) = empty_cart();
        cart.add(&product(1, 10.0), 1);
        // Catalogue price changed since; the line keeps the first price
        cart.add(&product(1, 12.5), 1);

        assert_eq!(cart.get(1).unwrap().price, 10.0);
        assert_eq!(cart.total(), 20.0);
    }

    #[test]
    fn test_add_rejects_non_positive_result() {
        let (storage, mut cart) = empty_cart();
        assert!(!cart.add(&product(1, 1.0), 0));
        assert!(!cart.add(&product(1, 1.0), -2));
        assert!(cart.is_empty());
        assert!(storage.get(CART_KEY).is_none());

        cart.add(&product(1, 1.0), 2);
        assert!(!cart.add(&product(1, 1.0), -2));
        assert_eq!(cart.get(1).unwrap().quantity, 2);
        assert!(cart.add(&product(1, 1.0), -1));
        assert_eq!(cart.get(1).unwrap().quantity, 1);
    }

    #[test]
    fn test_add_rejects_invalid_price() {
        let (_, mut cart) = empty_cart();
        assert!(!cart.add(&product(1, f64::NAN), 1));
        assert!(!cart.add(&product(2, -3.0), 1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_is_exact_and_zero_removes() {
        let (_, mut cart) = empty_cart();
        cart.add(&product(1, 2.0), 3);
        cart.add(&product(2, 1.0), 1);

        assert!(cart.set_quantity(1, 7));
        assert_eq!(cart.get(1).unwrap().quantity, 7);

        assert!(cart.set_quantity(1, 0));
        assert!(cart.get(1).is_none());
        // Subsequent remove is a no-op
        assert!(!cart.remove(1));
        assert_eq!(cart.len(), 1);

        // Absent product
        assert!(!cart.set_quantity(99, 4));
        assert!(cart.set_quantity(2, -5));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_empty_total_is_positive_zero() {
        let (_, cart) = empty_cart();
        assert_eq!(cart.total(), 0.0);
        assert!(!cart.total().is_sign_negative());
    }

    #[test]
    fn test_clear_zeroes_totals() {
        let (storage, mut cart) = empty_cart();
        cart.add(&product(1, 3.3), 3);
        cart.add(&product(2, 1.1), 1);

        cart.clear();
        assert_eq!(cart.total(), 0.0);
        assert!(cart.total().is_sign_positive());
        assert_eq!(cart.count(), 0);
        assert_eq!(storage.get(CART_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_every_mutation_persists() {
        let (storage, mut cart) = empty_cart();
        cart.add(&product(1, 2.5), 2);
        cart.add(&product(2, 1.0), 1);
        cart.set_quantity(2, 4);
        cart.remove(1);

        let reopened = Cart::restore(storage, None);
        assert_eq!(reopened.items(), cart.items());
        assert_eq!(reopened.count(), 4);
    }

    #[test]
    fn test_restore_from_garbage_is_empty() {
        for garbage in ["{oops", "42", "{\"items\":[]}", "null", ""] {
            let storage = MemoryStore::new();
            storage.set(CART_KEY, garbage);
            let cart = Cart::restore(storage.clone(), None);
            assert!(cart.is_empty(), "input {garbage:?}");
            assert_eq!(cart.total(), 0.0);
            assert_eq!(storage.get(CART_KEY).as_deref(), Some("[]"));
        }
    }

    #[test]
    fn test_restore_discards_malformed_entries() {
        let storage = MemoryStore::new();
        storage.set(
            CART_KEY,
            r#"[
                {"productId":1,"name":"Good","price":2.0,"quantity":2,"categoryName":"A"},
                {"productId":2,"name":"Zero","price":2.0,"quantity":0},
                {"productId":3,"name":"Negative","price":2.0,"quantity":-1},
                {"productId":4,"name":"NoPrice","quantity":1},
                "not an object",
                {"productId":1,"name":"Duplicate","price":9.0,"quantity":1},
                {"id":5,"name":"Legacy","price":1.5,"quantity":2}
            ]"#,
        );

        let cart = Cart::restore(storage.clone(), None);
        let ids: Vec<i64> = cart.items().iter().map(|i| i.product_id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(cart.get(1).unwrap().name, "Good");
        assert_eq!(cart.total(), 7.0);

        // The cleaned list was written back
        let again = Cart::restore(storage, None);
        assert_eq!(again.items(), cart.items());
    }

    #[test]
    fn test_namespaced_cart_is_isolated() {
        let storage = MemoryStore::new();
        let mut shop = Cart::restore(storage.clone(), Some("shop"));
        shop.add(&product(1, 1.0), 1);

        assert!(Cart::restore(storage.clone(), None).is_empty());
        assert_eq!(Cart::restore(storage, Some("shop")).len(), 1);
    }
}
