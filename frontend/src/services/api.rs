use async_trait::async_trait;
use domain::{
    ListFilter, RecordId, Repository, RepositoryError, Resource, Subresource, SubresourceRepository,
    WritableSubresource, WritableSubresourceRepository,
};
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::ListResponse;
use tracing::{debug, warn};

use super::config::ClientConfig;

/// HTTP client for the CRM REST API.
///
/// Implements the domain repository traits for every resource, so forms and
/// detail loaders talk to it without knowing about URLs.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            auth_token: config.auth_token.clone(),
            ..Self::with_base_url(config.api_base_url.as_str())
        }
    }

    /// Create a client against a custom base URL, without credentials
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}/", self.base_url, collection)
    }

    fn record_url(&self, collection: &str, id: RecordId) -> String {
        format!("{}/{}/{}/", self.base_url, collection, id)
    }

    fn nested_url(&self, collection: &str, id: RecordId, segment: &str) -> String {
        format!("{}/{}/{}/{}/", self.base_url, collection, id, segment)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.header("Authorization", &format!("Token {}", token)),
            None => builder,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, RepositoryError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;
        read_json(response).await
    }

    async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T, RepositoryError> {
        let request: Request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| RepositoryError::Decode(format!("Failed to serialize request: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;
        read_json(response).await
    }
}

fn with_query(url: String, filter: &ListFilter) -> String {
    if filter.is_empty() {
        return url;
    }
    let query = filter
        .params()
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                String::from(js_sys::encode_uri_component(key)),
                String::from(js_sys::encode_uri_component(value))
            )
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", url, query)
}

async fn check_status(response: Response) -> Result<Response, RepositoryError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let error = RepositoryError::from_status(status, &text);
    match &error {
        RepositoryError::NotFound => debug!(url = %response.url(), "not found"),
        _ => warn!(status, url = %response.url(), "request failed"),
    }
    Err(error)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RepositoryError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| RepositoryError::Decode(format!("Failed to parse response: {}", e)))
}

#[async_trait(?Send)]
impl<R: Resource> Repository<R> for ApiClient {
    async fn list(&self, filter: &ListFilter) -> Result<Vec<R::Record>, RepositoryError> {
        let url = with_query(self.collection_url(R::COLLECTION), filter);
        let page: ListResponse<R::Record> = self.fetch(Request::get(&url)).await?;
        Ok(page.into_items())
    }

    async fn get(&self, id: RecordId) -> Result<R::Record, RepositoryError> {
        self.fetch(Request::get(&self.record_url(R::COLLECTION, id))).await
    }

    async fn create(&self, payload: &R::Payload) -> Result<R::Record, RepositoryError> {
        self.send_json(Request::post(&self.collection_url(R::COLLECTION)), payload)
            .await
    }

    async fn update(&self, id: RecordId, payload: &R::Payload) -> Result<R::Record, RepositoryError> {
        self.send_json(Request::put(&self.record_url(R::COLLECTION, id)), payload)
            .await
    }

    async fn delete(&self, id: RecordId) -> Result<(), RepositoryError> {
        let response = self
            .authorize(Request::delete(&self.record_url(R::COLLECTION, id)))
            .send()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;
        check_status(response).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl<S: Subresource> SubresourceRepository<S> for ApiClient {
    async fn list_children(&self, parent: RecordId) -> Result<Vec<S::Record>, RepositoryError> {
        let url = self.nested_url(<S::Parent as Resource>::COLLECTION, parent, S::LIST_SEGMENT);
        let page: ListResponse<S::Record> = self.fetch(Request::get(&url)).await?;
        Ok(page.into_items())
    }
}

#[async_trait(?Send)]
impl<S: WritableSubresource> WritableSubresourceRepository<S> for ApiClient {
    async fn add_child(&self, parent: RecordId, payload: &S::Payload) -> Result<S::Record, RepositoryError> {
        let url = self.nested_url(<S::Parent as Resource>::COLLECTION, parent, S::ADD_SEGMENT);
        self.send_json(Request::post(&url), payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::resources::{ContactNotes, Contacts};

    #[test]
    fn test_urls_keep_trailing_slashes() {
        let client = ApiClient::with_base_url("https://crm.example.org/api/");

        assert_eq!(client.collection_url(Contacts::COLLECTION), "https://crm.example.org/api/contacts/");
        assert_eq!(client.record_url("inventory-items", 5), "https://crm.example.org/api/inventory-items/5/");
        assert_eq!(
            client.nested_url(Contacts::COLLECTION, 7, ContactNotes::ADD_SEGMENT),
            "https://crm.example.org/api/contacts/7/add_note/"
        );
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_configured_base_url_is_trimmed_once() {
        let config = ClientConfig {
            api_base_url: "https://crm.example.org/api//".to_string(),
            auth_token: Some("abc123".to_string()),
            log_filter: "info".to_string(),
            display: shared::DisplayConfig::default(),
        };
        let client = ApiClient::new(&config);

        assert_eq!(client.collection_url(Contacts::COLLECTION), "https://crm.example.org/api/contacts/");
        assert!(client.is_authenticated());
    }
}
