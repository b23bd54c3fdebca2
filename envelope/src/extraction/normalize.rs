//! Recursive removal of `results` and `__deferred` wrapping

use error_stack::Report;
use serde_json::Value;
use tracing::trace;

use crate::constants::ODataField;
use crate::error::{Error, Result};
use crate::json_field_access::JsonFieldAccess;

/// Rewrite a JSON value into plain JSON
///
/// - Non-objects are returned unchanged.
/// - An object with a `results` key becomes the array of its normalized entries, dropping its
///   sibling keys (including `__next`). Entries must be objects or null.
/// - An object with a `__deferred` key becomes an empty array.
/// - Any other object has each object-valued field normalized in place. Array-valued fields are
///   left alone, even when they hold objects.
///
/// Recurses once per nested object. Values parsed by `serde_json` are bounded by its nesting
/// limit (128), but a `Value` built in memory may be nested deep enough to exhaust the stack.
pub(crate) fn normalize(value: Value) -> Result<Value> {
    let mut object = match value {
        Value::Object(object) => object,
        other => return Ok(other),
    };

    if let Some(results) = object.remove(ODataField::Results.as_ref()) {
        return normalize_results(results);
    }

    if object.has_field(ODataField::Deferred) {
        trace!("Replacing deferred reference with an empty array");
        return Ok(Value::Array(Vec::new()));
    }

    for field in object.values_mut() {
        if field.is_object() {
            *field = normalize(std::mem::take(field))?;
        }
    }

    Ok(Value::Object(object))
}

/// Flatten a `results` container into the array of its normalized entries
///
/// Null entries are kept as null.
fn normalize_results(results: Value) -> Result<Value> {
    let entries = match results {
        Value::Array(entries) => entries,
        other => {
            return Err(Report::new(Error::unexpected(
                "results value",
                format!("expected an array of objects, found {}", json_type_name(&other)),
            )));
        }
    };

    trace!(count = entries.len(), "Flattening results container");

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if entry.is_object() || entry.is_null() {
                normalize(entry)
            } else {
                Err(Report::new(Error::unexpected(
                    "results entry",
                    format!("entry {index} is {}, expected an object", json_type_name(&entry)),
                )))
            }
        })
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

/// Name of the JSON type of `value`, for error messages
pub(crate) const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
