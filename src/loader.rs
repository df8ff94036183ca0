//! Featured Course Loader
//!
//! One bounded read of the course collection per activation.

use serde_json::Value;

use crate::docstore::{BoundedRead, ReadFailure, ReadResult, Record};
use crate::models::FeaturedItem;

pub const COURSES_COLLECTION: &str = "courses";
pub const FEATURED_LIMIT: usize = 3;

/// Load up to three featured courses in store order.
///
/// Failures are logged and produce an empty list.
pub async fn load_featured(store: &dyn BoundedRead) -> Vec<FeaturedItem> {
    match fetch_featured(store).await {
        Ok(items) => {
            log::info!("[Loader] Loaded {} featured courses", items.len());
            items
        }
        Err(e) => {
            log::error!("Error fetching featured courses: {}", e);
            Vec::new()
        }
    }
}

async fn fetch_featured(store: &dyn BoundedRead) -> ReadResult<Vec<FeaturedItem>> {
    let records = store.bounded_read(COURSES_COLLECTION, FEATURED_LIMIT).await?;
    records
        .into_iter()
        .take(FEATURED_LIMIT)
        .map(to_featured)
        .collect()
}

fn to_featured(record: Record) -> ReadResult<FeaturedItem> {
    serde_json::from_value(Value::Object(record)).map_err(|e| ReadFailure::Decode(e.to_string()))
}
