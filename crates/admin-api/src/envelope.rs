//! List response envelope normalization.
//!
//! The canonical list response is `{ "data": [...], "meta": { total, page, limit } }`.
//! Some deployments nest the page under the collection name instead, either as
//! `{ "cards": { data, meta } }` or `{ "data": { "cards": { data, meta } } }`.
//! Those shapes are accepted with a warning; anything else is a
//! [`ApiError::ShapeMismatch`].

use admin_model::{PageMeta, PageResult, Record, ResourceKind};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Which envelope shape a list response arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// `{ data: [...], meta }`.
    Canonical,
    /// `{ <collection>: { data, meta } }`.
    NestedAtRoot,
    /// `{ data: { <collection>: { data, meta } } }`.
    NestedUnderData,
}

/// Decodes a list response body into a [`PageResult`].
pub fn decode_list<R: Record>(body: &[u8]) -> Result<PageResult<R>> {
    let value: Value = serde_json::from_slice(body)?;
    normalize_list(value)
}

/// Normalizes an already-parsed list response into a [`PageResult`].
pub fn normalize_list<R: Record>(body: Value) -> Result<PageResult<R>> {
    let (shape, page) = locate_page(R::KIND, body)?;
    if shape != EnvelopeShape::Canonical {
        tracing::warn!(
            resource = %R::KIND,
            ?shape,
            "list response used a non-canonical envelope"
        );
    }
    page_from_object::<R>(page)
}

/// Finds the `{ data, meta }` object inside a response body.
fn locate_page(kind: ResourceKind, body: Value) -> Result<(EnvelopeShape, Value)> {
    let Value::Object(mut root) = body else {
        return Err(ApiError::ShapeMismatch(
            "list response is not a JSON object".to_string(),
        ));
    };
    let key = kind.envelope_key();

    if root.get("data").is_some_and(Value::is_array) {
        return Ok((EnvelopeShape::Canonical, Value::Object(root)));
    }
    if let Some(nested) = root.remove(key) {
        return Ok((EnvelopeShape::NestedAtRoot, nested));
    }
    if let Some(Value::Object(mut data)) = root.remove("data")
        && let Some(nested) = data.remove(key)
    {
        return Ok((EnvelopeShape::NestedUnderData, nested));
    }

    Err(ApiError::ShapeMismatch(format!(
        "expected `data` array or `{key}` page in list response"
    )))
}

fn page_from_object<R: DeserializeOwned>(page: Value) -> Result<PageResult<R>> {
    let Value::Object(mut page) = page else {
        return Err(ApiError::ShapeMismatch(
            "list page is not a JSON object".to_string(),
        ));
    };
    let data = page
        .remove("data")
        .ok_or_else(|| ApiError::ShapeMismatch("list page has no `data`".to_string()))?;
    let meta = page
        .remove("meta")
        .ok_or_else(|| ApiError::ShapeMismatch("list page has no `meta`".to_string()))?;

    let records: Vec<R> = serde_json::from_value(data)?;
    let meta: PageMeta = serde_json::from_value(meta)?;
    Ok(PageResult::from_parts(records, meta))
}
