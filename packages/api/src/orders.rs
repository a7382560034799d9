//! Order placement and order management.

use reqwest::Method;
use store::{Cart, KeyValueStore};

use crate::client::ApiClient;
use crate::envelope::{Page, PageRequest};
use crate::error::ApiError;
use crate::models::{Order, OrderRequest, OrderStatus, OrderStatusUpdate};

impl<S: KeyValueStore> ApiClient<S> {
    /// `POST /orders/create`
    pub async fn create_order(&self, request: &OrderRequest) -> Result<Order, ApiError> {
        let call = self.call(Method::POST, "/orders/create").json(request);
        self.send(call).await
    }

    /// Submit the cart as an order. The cart is cleared only once the backend
    /// has accepted it; on any failure it is left untouched for a retry.
    pub async fn place_order<C: KeyValueStore>(&self, cart: &mut Cart<C>) -> Result<Order, ApiError> {
        let request = OrderRequest::from_cart(cart);
        if request.is_empty() {
            return Err(ApiError::EmptyCart);
        }
        let order = self.create_order(&request).await?;
        cart.clear();
        tracing::info!(order_id = order.id, lines = request.items.len(), "Order placed");
        Ok(order)
    }

    /// `GET /orders/user`
    pub async fn my_orders(&self, page: PageRequest) -> Result<Page<Order>, ApiError> {
        let call = self.call(Method::GET, "/orders/user").query(&page);
        self.send(call).await
    }

    /// `GET /orders/all`
    pub async fn all_orders(&self, page: PageRequest) -> Result<Page<Order>, ApiError> {
        let call = self.call(Method::GET, "/orders/all").query(&page);
        self.send(call).await
    }

    /// `GET /orders/{id}`
    pub async fn order(&self, id: i64) -> Result<Order, ApiError> {
        self.send(self.call(Method::GET, &format!("/orders/{id}"))).await
    }

    /// `PUT /orders/update/{id}`
    pub async fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<Order, ApiError> {
        let call = self
            .call(Method::PUT, &format!("/orders/update/{id}"))
            .json(&OrderStatusUpdate { status });
        self.send(call).await
    }

    /// `DELETE /orders/{id}`
    pub async fn delete_order(&self, id: i64) -> Result<String, ApiError> {
        self.send_ack(self.call(Method::DELETE, &format!("/orders/{id}")))
            .await
    }
}
