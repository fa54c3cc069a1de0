//! In-memory repository double that records every call.

use crate::repository::{
    ListFilter, RecordId, Repository, RepositoryError, Resource, Subresource, SubresourceRepository,
    WritableSubresource, WritableSubresourceRepository,
};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

pub struct FakeRepository<R: Resource> {
    record: Option<R::Record>,
    records: Vec<R::Record>,
    failure: Option<RepositoryError>,
    children: HashMap<&'static str, Result<Value, RepositoryError>>,
    child: Option<Value>,
    calls: RefCell<Vec<String>>,
    sent: RefCell<Vec<R::Payload>>,
}

impl<R: Resource> FakeRepository<R>
where
    R::Payload: Clone,
{
    pub fn new() -> Self {
        Self {
            record: None,
            records: Vec::new(),
            failure: None,
            children: HashMap::new(),
            child: None,
            calls: RefCell::new(Vec::new()),
            sent: RefCell::new(Vec::new()),
        }
    }

    /// Record answered by `get`, `create` and `update`
    pub fn returning(mut self, record: R::Record) -> Self {
        self.record = Some(record);
        self
    }

    pub fn listing(mut self, records: Vec<R::Record>) -> Self {
        self.records = records;
        self
    }

    /// Every top-level call and every `add_child` fails with `error`
    pub fn failing_with(mut self, error: RepositoryError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn with_children<T: Serialize>(mut self, segment: &'static str, children: &[T]) -> Self {
        let value = serde_json::to_value(children).expect("children serialize");
        self.children.insert(segment, Ok(value));
        self
    }

    pub fn failing_children(mut self, segment: &'static str, error: RepositoryError) -> Self {
        self.children.insert(segment, Err(error));
        self
    }

    /// Record answered by `add_child`
    pub fn returning_child<T: Serialize>(mut self, child: &T) -> Self {
        self.child = Some(serde_json::to_value(child).expect("child serializes"));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn sent_payloads(&self) -> Vec<R::Payload> {
        self.sent.borrow().clone()
    }

    fn log(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn answer(&self) -> Result<R::Record, RepositoryError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.record.clone().ok_or(RepositoryError::NotFound)
    }
}

#[async_trait(?Send)]
impl<R: Resource> Repository<R> for FakeRepository<R>
where
    R::Payload: Clone,
{
    async fn list(&self, _filter: &ListFilter) -> Result<Vec<R::Record>, RepositoryError> {
        self.log("list".to_string());
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.records.clone()),
        }
    }

    async fn get(&self, id: RecordId) -> Result<R::Record, RepositoryError> {
        self.log(format!("get {}", id));
        self.answer()
    }

    async fn create(&self, payload: &R::Payload) -> Result<R::Record, RepositoryError> {
        self.log("create".to_string());
        self.sent.borrow_mut().push(payload.clone());
        self.answer()
    }

    async fn update(&self, id: RecordId, payload: &R::Payload) -> Result<R::Record, RepositoryError> {
        self.log(format!("update {}", id));
        self.sent.borrow_mut().push(payload.clone());
        self.answer()
    }

    async fn delete(&self, id: RecordId) -> Result<(), RepositoryError> {
        self.log(format!("delete {}", id));
        self.answer().map(|_| ())
    }
}

#[async_trait(?Send)]
impl<S: Subresource> SubresourceRepository<S> for FakeRepository<S::Parent>
where
    <S::Parent as Resource>::Payload: Clone,
{
    async fn list_children(&self, parent: RecordId) -> Result<Vec<S::Record>, RepositoryError> {
        self.log(format!("list {} {}", S::LIST_SEGMENT, parent));
        match self.children.get(S::LIST_SEGMENT) {
            Some(Ok(value)) => {
                serde_json::from_value(value.clone()).map_err(|error| RepositoryError::Decode(error.to_string()))
            }
            Some(Err(error)) => Err(error.clone()),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl<S: WritableSubresource> WritableSubresourceRepository<S> for FakeRepository<S::Parent>
where
    <S::Parent as Resource>::Payload: Clone,
{
    async fn add_child(&self, parent: RecordId, _payload: &S::Payload) -> Result<S::Record, RepositoryError> {
        self.log(format!("add {} {}", S::LIST_SEGMENT, parent));
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let value = self.child.clone().ok_or(RepositoryError::NotFound)?;
        serde_json::from_value(value).map_err(|error| RepositoryError::Decode(error.to_string()))
    }
}
