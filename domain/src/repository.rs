//! Persistence seam between the domain layer and the REST API.
//!
//! A [`Resource`] names a top-level collection together with its record and
//! payload types; a [`Subresource`] is a collection nested under one parent
//! record. The frontend's HTTP client implements the repository traits for
//! every resource, and tests substitute an in-memory double.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Primary key of a server record
pub type RecordId = i64;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepositoryError {
    /// The request never produced a usable HTTP response
    #[error("network error: {0}")]
    Transport(String),
    #[error("record not found")]
    NotFound,
    /// The server answered with a client error and (usually) a field error body
    #[error("request rejected with status {status}")]
    Rejected { status: u16, body: serde_json::Value },
    /// A server fault, or a client error without a JSON error body
    #[error("server responded with status {status}")]
    Server { status: u16 },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl RepositoryError {
    /// Classify a non-2xx response from its status and raw body text.
    ///
    /// Only a 4xx carrying a JSON object or array counts as a rejection whose
    /// body can be merged into a form; everything else is one general error.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 404 {
            return RepositoryError::NotFound;
        }
        if !(400..500).contains(&status) {
            return RepositoryError::Server { status };
        }
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(body) if body.is_object() || body.is_array() => RepositoryError::Rejected { status, body },
            _ => RepositoryError::Server { status },
        }
    }
}

pub trait Resource: 'static {
    type Record: DeserializeOwned + Clone + 'static;
    type Payload: Serialize + 'static;

    /// Path segment under the API root, without slashes
    const COLLECTION: &'static str;
    /// Singular noun used in log lines and messages
    const LABEL: &'static str;
}

pub trait Subresource: 'static {
    type Parent: Resource;
    type Record: DeserializeOwned + Clone + 'static;

    /// Segment under `{collection}/{parent_id}/` that lists the children
    const LIST_SEGMENT: &'static str;
}

/// A sub-resource that also accepts new children through its parent
pub trait WritableSubresource: Subresource {
    type Payload: Serialize + 'static;

    /// Segment under `{collection}/{parent_id}/` that accepts a new child
    const ADD_SEGMENT: &'static str;
}

/// Query-string filters for list calls (`?search=...&status=ACT`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    params: Vec<(String, String)>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn search(self, term: &str) -> Self {
        let term = term.trim();
        if term.is_empty() {
            self
        } else {
            self.with("search", term)
        }
    }

    pub fn page(self, page: u32) -> Self {
        self.with("page", page.to_string())
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[async_trait(?Send)]
pub trait Repository<R: Resource> {
    async fn list(&self, filter: &ListFilter) -> Result<Vec<R::Record>, RepositoryError>;
    async fn get(&self, id: RecordId) -> Result<R::Record, RepositoryError>;
    async fn create(&self, payload: &R::Payload) -> Result<R::Record, RepositoryError>;
    async fn update(&self, id: RecordId, payload: &R::Payload) -> Result<R::Record, RepositoryError>;
    async fn delete(&self, id: RecordId) -> Result<(), RepositoryError>;
}

#[async_trait(?Send)]
pub trait SubresourceRepository<S: Subresource> {
    async fn list_children(&self, parent: RecordId) -> Result<Vec<S::Record>, RepositoryError>;
}

#[async_trait(?Send)]
pub trait WritableSubresourceRepository<S: WritableSubresource>: SubresourceRepository<S> {
    async fn add_child(&self, parent: RecordId, payload: &S::Payload) -> Result<S::Record, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_filter_skips_blank_search() {
        let filter = ListFilter::new().search("   ").page(2);
        assert_eq!(filter.params(), &[("page".to_string(), "2".to_string())]);

        let filter = ListFilter::new().search(" food bank ").with("status", "ACT");
        assert_eq!(
            filter.params(),
            &[
                ("search".to_string(), "food bank".to_string()),
                ("status".to_string(), "ACT".to_string()),
            ]
        );
        assert!(ListFilter::new().is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(RepositoryError::NotFound.to_string(), "record not found");
        let rejected = RepositoryError::Rejected {
            status: 400,
            body: serde_json::json!({ "name": ["This field is required."] }),
        };
        assert_eq!(rejected.to_string(), "request rejected with status 400");
        assert_eq!(
            RepositoryError::Server { status: 502 }.to_string(),
            "server responded with status 502"
        );
    }

    #[test]
    fn test_only_client_errors_with_json_bodies_are_rejections() {
        assert_eq!(
            RepositoryError::from_status(400, r#"{"name": ["This field is required."]}"#),
            RepositoryError::Rejected {
                status: 400,
                body: serde_json::json!({ "name": ["This field is required."] }),
            }
        );
        assert_eq!(
            RepositoryError::from_status(403, r#"{"detail": "Invalid token."}"#),
            RepositoryError::Rejected { status: 403, body: serde_json::json!({ "detail": "Invalid token." }) }
        );
        assert!(matches!(
            RepositoryError::from_status(400, r#"["Duplicate donation."]"#),
            RepositoryError::Rejected { status: 400, .. }
        ));
        assert_eq!(RepositoryError::from_status(404, "<html>gone</html>"), RepositoryError::NotFound);
    }

    #[test]
    fn test_server_faults_and_non_json_bodies_are_general_errors() {
        assert_eq!(
            RepositoryError::from_status(500, "<html><body>Internal Server Error</body></html>"),
            RepositoryError::Server { status: 500 }
        );
        assert_eq!(
            RepositoryError::from_status(503, r#"{"detail": "maintenance"}"#),
            RepositoryError::Server { status: 503 }
        );
        assert_eq!(RepositoryError::from_status(401, "Unauthorized"), RepositoryError::Server { status: 401 });
        assert_eq!(RepositoryError::from_status(400, ""), RepositoryError::Server { status: 400 });
        assert_eq!(RepositoryError::from_status(400, r#""bad""#), RepositoryError::Server { status: 400 });
    }
}
