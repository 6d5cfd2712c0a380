//! Response envelope normalization.
//!
//! The remote serves lists in three shapes: a bare array, `{data, total}`,
//! and `{items, total(Count)}`. Everything collapses into the canonical
//! [`ListPage`]. Single entities arrive either bare or under `data`; a body
//! matching neither is a hard [`ErrorKind::UnexpectedShape`] so callers can
//! refetch instead of silently diverging from server truth.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{ErrorKind, Result};

/// Canonical list shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Default for ListPage<T> {
    fn default() -> ListPage<T> {
        ListPage {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// Collapse any recognized list envelope into a [`ListPage`]. Unrecognized
/// shapes normalize to the empty page; list fetches stay tolerant. Elements
/// that fail typed deserialization are skipped.
pub fn normalize_list<T: DeserializeOwned>(payload: &Value) -> ListPage<T> {
    let array = if let Some(data) = payload.get("data").and_then(Value::as_array) {
        data
    } else if let Some(direct) = payload.as_array() {
        direct
    } else if let Some(items) = payload.get("items").and_then(Value::as_array) {
        items
    } else {
        debug!("unrecognized list payload shape, normalizing to empty");
        return ListPage::default();
    };

    let items: Vec<T> = array
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect();

    let total = payload
        .get("total")
        .and_then(Value::as_u64)
        .or_else(|| payload.get("totalCount").and_then(Value::as_u64))
        .unwrap_or(array.len() as u64);

    ListPage { items, total }
}

/// Extract a single entity from a bare object or a `{data: {...}}` envelope.
pub fn normalize_entity<T: DeserializeOwned>(payload: &Value) -> Result<T> {
    if let Some(data) = payload.get("data").filter(|v| v.is_object()) {
        return Ok(serde_json::from_value(data.clone())?);
    }

    if payload.is_object() {
        return Ok(serde_json::from_value(payload.clone())?);
    }

    Err(ErrorKind::UnexpectedShape(format!(
        "expected an entity object, got {payload}"
    ))
    .into())
}
