//! Admin user management.

use reqwest::Method;
use store::KeyValueStore;

use crate::client::ApiClient;
use crate::envelope::{Page, PageRequest};
use crate::error::ApiError;
use crate::models::{UserSummary, UserUpdate};

impl<S: KeyValueStore> ApiClient<S> {
    /// `GET /users/all`
    pub async fn users(&self, page: PageRequest) -> Result<Page<UserSummary>, ApiError> {
        let call = self.call(Method::GET, "/users/all").query(&page);
        self.send(call).await
    }

    /// `GET /users/{id}`
    pub async fn user(&self, id: i64) -> Result<UserSummary, ApiError> {
        self.send(self.call(Method::GET, &format!("/users/{id}"))).await
    }

    /// `PUT /users/update/{id}`
    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<UserSummary, ApiError> {
        let call = self
            .call(Method::PUT, &format!("/users/update/{id}"))
            .json(update);
        self.send(call).await
    }

    /// `DELETE /users/{id}`
    pub async fn delete_user(&self, id: i64) -> Result<String, ApiError> {
        self.send_ack(self.call(Method::DELETE, &format!("/users/{id}")))
            .await
    }
}
