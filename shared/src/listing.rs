use serde::{Deserialize, Serialize};

/// Body of a collection endpoint.
///
/// Paginated endpoints wrap the rows in an envelope, unpaginated ones return a
/// bare array; callers usually only want the rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paginated(Page<T>),
    Plain(Vec<T>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Paginated(page) => page.results,
            ListResponse::Plain(items) => items,
        }
    }

    /// Whether the server has more rows after this page
    pub fn has_more(&self) -> bool {
        match self {
            ListResponse::Paginated(page) => page.next.is_some(),
            ListResponse::Plain(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::Contact;
    use serde_json::json;

    #[test]
    fn test_paginated_and_plain_lists_yield_same_rows() {
        let paginated: ListResponse<Contact> = serde_json::from_value(json!({
            "count": 1,
            "next": "/api/contacts/?page=2",
            "previous": null,
            "results": [{ "id": 1, "first_name": "Ada" }]
        }))
        .unwrap();
        let plain: ListResponse<Contact> =
            serde_json::from_value(json!([{ "id": 1, "first_name": "Ada" }])).unwrap();

        assert!(paginated.has_more());
        assert!(!plain.has_more());
        assert_eq!(paginated.into_items(), plain.into_items());
    }
}
