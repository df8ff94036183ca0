//! In-Memory Document Store
//!
//! Test double for `BoundedRead` that remembers every query it served.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use super::{BoundedRead, ReadFailure, ReadResult, Record};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<Record>>,
    failure: Option<ReadFailure>,
    /// (collection, limit) of each read, in call order
    queries: RefCell<Vec<(String, usize)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, collection: &str, records: Vec<Record>) -> Self {
        self.collections.insert(collection.to_string(), records);
        self
    }

    /// Make every read fail with `failure`
    pub fn failing(mut self, failure: ReadFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries.borrow().clone()
    }
}

#[async_trait(?Send)]
impl BoundedRead for MemoryStore {
    async fn bounded_read(&self, collection: &str, limit: usize) -> ReadResult<Vec<Record>> {
        self.queries.borrow_mut().push((collection.to_string(), limit));

        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }

        Ok(self
            .collections
            .get(collection)
            .map(|records| records.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str) -> Record {
        json!({ "id": id }).as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_respects_limit() {
        let store = MemoryStore::new().with_records("courses", vec![record("a"), record("b"), record("c")]);
        let records = store.bounded_read("courses", 2).await.unwrap();
        assert_eq!(records, vec![record("a"), record("b")]);
        assert_eq!(store.queries(), vec![("courses".to_string(), 2)]);
    }

    #[tokio::test]
    async fn test_unknown_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.bounded_read("lessons", 3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failing_store_still_records_query() {
        let store = MemoryStore::new().failing(ReadFailure::Status(503));
        assert_eq!(store.bounded_read("courses", 3).await, Err(ReadFailure::Status(503)));
        assert_eq!(store.queries().len(), 1);
    }
}
