//! Document Store Access
//!
//! A single narrow read interface over the external course collection,
//! with a REST adapter for production and an in-memory fake for tests.

mod firestore;
#[cfg(test)]
mod memory;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

pub use firestore::FirestoreClient;
#[cfg(test)]
pub use memory::MemoryStore;

/// One untyped document: string keys to JSON values
pub type Record = Map<String, Value>;

pub type ReadResult<T> = Result<T, ReadFailure>;

/// Anything that went wrong talking to the external store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadFailure {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("store responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Read at most `limit` records from a collection, in store order.
///
/// Not `Send`: adapters run on the browser's single-threaded executor.
#[async_trait(?Send)]
pub trait BoundedRead {
    async fn bounded_read(&self, collection: &str, limit: usize) -> ReadResult<Vec<Record>>;
}
