//! Firestore REST Adapter
//!
//! Runs a structured query against `documents:runQuery` and flattens
//! Firestore's typed values into plain JSON records.

use async_trait::async_trait;
use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::{json, Map, Number, Value};

use super::{BoundedRead, ReadFailure, ReadResult, Record};
use crate::config::AppConfig;

/// Unreserved URL characters stay as-is
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Network client for one Firestore project
#[derive(Debug, Clone)]
pub struct FirestoreClient {
    url: String,
}

impl FirestoreClient {
    pub fn new(config: &AppConfig) -> Self {
        Self { url: run_query_url(config) }
    }
}

#[async_trait(?Send)]
impl BoundedRead for FirestoreClient {
    async fn bounded_read(&self, collection: &str, limit: usize) -> ReadResult<Vec<Record>> {
        log::debug!("[Firestore] runQuery {} limit={}", collection, limit);
        let request = Request::post(&self.url)
            .json(&run_query_body(collection, limit))
            .map_err(|e| ReadFailure::Transport(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ReadFailure::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ReadFailure::Status(response.status()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ReadFailure::Decode(e.to_string()))?;

        parse_run_query(&body, limit)
    }
}

pub(crate) fn run_query_url(config: &AppConfig) -> String {
    let mut url = format!(
        "{}/projects/{}/databases/(default)/documents:runQuery",
        config.store_base_url.trim_end_matches('/'),
        utf8_percent_encode(&config.project_id, URL_COMPONENT),
    );
    if let Some(key) = &config.api_key {
        url.push_str("?key=");
        url.extend(utf8_percent_encode(key, URL_COMPONENT));
    }
    url
}

pub(crate) fn run_query_body(collection: &str, limit: usize) -> Value {
    json!({
        "structuredQuery": {
            "from": [{ "collectionId": collection }],
            "limit": limit,
        }
    })
}

/// Turn a runQuery response (a JSON array of results) into records.
///
/// Results without a `document` (e.g. a bare `readTime`) are skipped.
pub(crate) fn parse_run_query(body: &Value, limit: usize) -> ReadResult<Vec<Record>> {
    let results = body
        .as_array()
        .ok_or_else(|| ReadFailure::Decode("expected an array of query results".to_string()))?;

    results
        .iter()
        .filter_map(|result| result.get("document"))
        .take(limit)
        .map(decode_document)
        .collect()
}

fn decode_document(document: &Value) -> ReadResult<Record> {
    let name = document
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| ReadFailure::Decode("document without a name".to_string()))?;

    let mut record = match document.get("fields") {
        Some(fields) => decode_fields(fields)?,
        None => Map::new(),
    };
    record.insert("id".to_string(), Value::String(document_id(name).to_string()));
    Ok(record)
}

/// Last path segment of `projects/p/databases/(default)/documents/courses/<id>`
fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

fn decode_fields(fields: &Value) -> ReadResult<Map<String, Value>> {
    let fields = fields
        .as_object()
        .ok_or_else(|| ReadFailure::Decode("fields is not an object".to_string()))?;

    fields
        .iter()
        .map(|(key, value)| decode_value(value).map(|decoded| (key.clone(), decoded)))
        .collect()
}

/// Decode one typed Firestore value, e.g. `{"integerValue": "49"}` -> `49`
pub(crate) fn decode_value(value: &Value) -> ReadResult<Value> {
    let (kind, inner) = value
        .as_object()
        .and_then(|obj| obj.iter().next())
        .ok_or_else(|| ReadFailure::Decode(format!("untyped value: {}", value)))?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" | "geoPointValue" | "stringValue" | "timestampValue" | "referenceValue"
        | "bytesValue" => Ok(inner.clone()),
        // int64 is sent as a decimal string
        "integerValue" => match inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(Value::from)
                .map_err(|e| ReadFailure::Decode(format!("integerValue {:?}: {}", s, e))),
            Value::Number(_) => Ok(inner.clone()),
            other => Err(ReadFailure::Decode(format!("integerValue {}", other))),
        },
        "doubleValue" => match inner {
            Value::Number(_) => Ok(inner.clone()),
            // NaN and Infinity arrive as strings and have no JSON form
            Value::String(s) => Ok(s
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null)),
            other => Err(ReadFailure::Decode(format!("doubleValue {}", other))),
        },
        "mapValue" => match inner.get("fields") {
            Some(fields) => decode_fields(fields).map(Value::Object),
            None => Ok(Value::Object(Map::new())),
        },
        "arrayValue" => match inner.get("values").and_then(Value::as_array) {
            Some(values) => values.iter().map(decode_value).collect::<ReadResult<Vec<_>>>().map(Value::Array),
            None => Ok(Value::Array(Vec::new())),
        },
        other => Err(ReadFailure::Decode(format!("unknown value type {}", other))),
    }
}
