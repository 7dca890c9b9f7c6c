//! HTTP route handlers.

pub mod communication;
pub mod dashboard;
pub mod donations;
pub mod health;
pub mod inventory;
pub mod map;
pub mod partners;
pub mod reports;

use serde::Serialize;

/// Filtered list of records in store order.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_counts_items() {
        let response = ListResponse::from(vec!["a", "b"]);
        assert_eq!(response.total, 2);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"items": ["a", "b"], "total": 2}));
    }
}
