//! Stock records.

use reqwest::Method;
use serde::Serialize;
use store::KeyValueStore;

use crate::client::ApiClient;
use crate::envelope::{Page, PageRequest};
use crate::error::ApiError;
use crate::models::{InventoryRecord, InventoryRequest, InventoryUpdate};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Adjustment {
    quantity_change: i64,
}

impl<S: KeyValueStore> ApiClient<S> {
    /// `GET /inventory/all`
    pub async fn inventory(&self, page: PageRequest) -> Result<Page<InventoryRecord>, ApiError> {
        let call = self.call(Method::GET, "/inventory/all").query(&page);
        self.send(call).await
    }

    /// `GET /inventory/{id}`
    pub async fn inventory_record(&self, id: i64) -> Result<InventoryRecord, ApiError> {
        self.send(self.call(Method::GET, &format!("/inventory/{id}")))
            .await
    }

    /// `GET /inventory/product/{productId}`
    pub async fn inventory_for_product(&self, product_id: i64) -> Result<InventoryRecord, ApiError> {
        self.send(self.call(Method::GET, &format!("/inventory/product/{product_id}")))
            .await
    }

    /// `POST /inventory/add`
    pub async fn create_inventory(&self, record: &InventoryRequest) -> Result<InventoryRecord, ApiError> {
        let call = self.call(Method::POST, "/inventory/add").json(record);
        self.send(call).await
    }

    /// `PUT /inventory/update/{id}`
    pub async fn update_inventory(
        &self,
        id: i64,
        update: &InventoryUpdate,
    ) -> Result<InventoryRecord, ApiError> {
        let call = self
            .call(Method::PUT, &format!("/inventory/update/{id}"))
            .json(update);
        self.send(call).await
    }

    /// `PATCH /inventory/adjust/{id}?quantityChange=N`. `change` may be negative.
    pub async fn adjust_inventory(&self, id: i64, change: i64) -> Result<InventoryRecord, ApiError> {
        let call = self
            .call(Method::PATCH, &format!("/inventory/adjust/{id}"))
            .query(&Adjustment {
                quantity_change: change,
            });
        self.send(call).await
    }

    /// `DELETE /inventory/{id}`
    pub async fn delete_inventory(&self, id: i64) -> Result<String, ApiError> {
        self.send_ack(self.call(Method::DELETE, &format!("/inventory/{id}")))
            .await
    }
}
