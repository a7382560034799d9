//! Response envelopes.
//!
//! Every backend response body has the shape `{ "data": ..., "message": ... }`.
//! Error responses carry at least a `message`.

use serde::{Deserialize, Serialize};

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a non-2xx response. Anything unparsable is treated as empty.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// One page of a listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub is_last: bool,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        !self.is_last && self.current_page.saturating_add(1) < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            current_page: 0,
            total_items: 0,
            total_pages: 0,
            is_last: true,
        }
    }
}

/// `page` / `size` query parameters accepted by every listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_backend_json() {
        let json = r#"{"content":[1,2,3],"currentPage":0,"totalItems":13,"totalPages":2,"isLast":false}"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert!(page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_has_next_at_last_representable_page() {
        let page = Page::<u8> {
            current_page: u32::MAX,
            total_pages: u32::MAX,
            ..Page::default()
        };
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_envelope_message_is_optional() {
        let envelope: Envelope<u8> = serde_json::from_str(r#"{"data":5}"#).unwrap();
        assert_eq!(envelope.data, 5);
        assert!(envelope.message.is_none());
    }
}
