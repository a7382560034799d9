use serde::Serialize;

use crate::envelope::PageRequest;

/// Query for `GET /products/public/all`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub page: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascending: Option<bool>,
}

impl ProductQuery {
    pub fn page(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            category_id: None,
            sort_by: None,
            ascending: None,
        }
    }

    pub fn in_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn sorted_by(mut self, field: impl Into<String>, ascending: bool) -> Self {
        self.sort_by = Some(field.into());
        self.ascending = Some(ascending);
        self
    }
}

impl From<PageRequest> for ProductQuery {
    fn from(page: PageRequest) -> Self {
        Self::page(page.page, page.size)
    }
}

/// Body for creating or updating a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub category_id: i64,
    pub price: f64,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

/// Body for creating or updating a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_query_serialises_only_set_filters() {
        let query = ProductQuery::page(1, 12);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({"page": 1, "size": 12})
        );

        let query = ProductQuery::page(0, 12).in_category(4).sorted_by("price", false);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({"page": 0, "size": 12, "categoryId": 4, "sortBy": "price", "ascending": false})
        );
    }
}
