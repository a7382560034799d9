//! Catalogue endpoints: products and categories.

use reqwest::Method;
use store::{Category, KeyValueStore, Product};

use crate::client::ApiClient;
use crate::envelope::{Page, PageRequest};
use crate::error::ApiError;
use crate::models::{CategoryRequest, ProductQuery, ProductRequest};

impl<S: KeyValueStore> ApiClient<S> {
    /// `GET /products/public/all`
    pub async fn products(&self, query: &ProductQuery) -> Result<Page<Product>, ApiError> {
        let call = self.call(Method::GET, "/products/public/all").query(query);
        self.send(call).await
    }

    /// `GET /products/{id}`
    pub async fn product(&self, id: i64) -> Result<Product, ApiError> {
        self.send(self.call(Method::GET, &format!("/products/{id}")))
            .await
    }

    /// `POST /products/add`
    pub async fn create_product(&self, product: &ProductRequest) -> Result<Product, ApiError> {
        let call = self.call(Method::POST, "/products/add").json(product);
        self.send(call).await
    }

    /// `PUT /products/update/{id}`
    pub async fn update_product(
        &self,
        id: i64,
        product: &ProductRequest,
    ) -> Result<Product, ApiError> {
        let call = self
            .call(Method::PUT, &format!("/products/update/{id}"))
            .json(product);
        self.send(call).await
    }

    /// `DELETE /products/{id}`
    pub async fn delete_product(&self, id: i64) -> Result<String, ApiError> {
        self.send_ack(self.call(Method::DELETE, &format!("/products/{id}")))
            .await
    }

    /// `GET /categories/public/all`
    pub async fn categories(&self, page: PageRequest) -> Result<Page<Category>, ApiError> {
        let call = self.call(Method::GET, "/categories/public/all").query(&page);
        self.send(call).await
    }

    /// `GET /categories/{id}`
    pub async fn category(&self, id: i64) -> Result<Category, ApiError> {
        self.send(self.call(Method::GET, &format!("/categories/{id}")))
            .await
    }

    /// `POST /categories/add`
    pub async fn create_category(&self, category: &CategoryRequest) -> Result<Category, ApiError> {
        let call = self.call(Method::POST, "/categories/add").json(category);
        self.send(call).await
    }

    /// `PUT /categories/update/{id}`
    pub async fn update_category(
        &self,
        id: i64,
        category: &CategoryRequest,
    ) -> Result<Category, ApiError> {
        let call = self
            .call(Method::PUT, &format!("/categories/update/{id}"))
            .json(category);
        self.send(call).await
    }

    /// `DELETE /categories/{id}`
    pub async fn delete_category(&self, id: i64) -> Result<String, ApiError> {
        self.send_ack(self.call(Method::DELETE, &format!("/categories/{id}")))
            .await
    }
}
