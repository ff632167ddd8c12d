//! Decoders for the CMS responses

use super::types::{ApiRoot, RawEntry, RawPage};
use crate::error::{Error, Result};
use crate::types::PostDocument;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a search response body into a listing page
pub fn decode_page(body: &str) -> Result<RawPage> {
    let value = parse_body(body)?;
    let results = results_array(&value)?;

    let entries = results
        .iter()
        .enumerate()
        .map(|(index, entry)| decode_entry::<RawEntry>(entry, index))
        .collect::<Result<Vec<_>>>()?;

    let next_page = match value.get("next_page") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(Error::malformed(format!(
                "`next_page` must be a string or null, got {other}"
            )))
        }
    };

    Ok(RawPage::new(entries, next_page))
}

/// Decode a search response body into full post documents
pub fn decode_documents(body: &str) -> Result<Vec<PostDocument>> {
    let value = parse_body(body)?;
    results_array(&value)?
        .iter()
        .enumerate()
        .map(|(index, entry)| decode_entry::<PostDocument>(entry, index))
        .collect()
}

/// Decode the API root document
pub fn decode_api_root(body: &str) -> Result<ApiRoot> {
    let value = parse_body(body)?;
    serde_json::from_value(value).map_err(|e| Error::malformed(format!("API root: {e}")))
}

fn parse_body(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|e| Error::malformed(format!("invalid JSON: {e}")))
}

fn results_array(value: &Value) -> Result<&Vec<Value>> {
    value
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::malformed("missing `results` array"))
}

fn decode_entry<T: DeserializeOwned>(entry: &Value, index: usize) -> Result<T> {
    T::deserialize(entry).map_err(|e| Error::malformed(format!("entry {index}: {e}")))
}
