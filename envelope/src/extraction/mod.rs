//! The three extraction operations over `d`-wrapped responses
//!
//! Each call parses the response text, takes the `d` payload, and works on it without any
//! shared state. Error reporting differs per operation:
//! - [`extract_object`] returns [`Error::Structure`] as raised.
//! - [`extract_collection`] and [`extract_skip_token`] re-signal every failure as
//!   [`Error::InvalidJson`], keeping the original report as the cause.

mod normalize;
mod skip_token;


use error_stack::Report;
use serde_json::{Map, Value};
use tracing::debug;

use self::normalize::{json_type_name, normalize};
use self::skip_token::{find_skip_token, next_link_text};
use crate::constants::ODataField;
use crate::error::{Error, Result, wrap_invalid_json};
use crate::json_field_access::JsonFieldAccess;

/// Extract the single entity held by the envelope as compact JSON
///
/// The `d` payload is normalized: nested `results` containers become arrays and `__deferred`
/// navigation properties become empty arrays.
///
/// # Errors
///
/// Returns [`Error::Structure`] if the text is not JSON, has no `d` object, has a root value
/// that is not an object, or holds a `results` container that is not an array of objects.
pub fn extract_object(response: &str) -> Result<String> {
    debug!(response_len = response.len(), "Extracting object");

    let output = object_from(response).inspect_err(|report| {
        debug!(error = %report.current_context(), "Object extraction failed");
    })?;

    debug!(output_len = output.len(), "Extracted object");
    Ok(output)
}

/// Extract the entities of `d.results` as a compact JSON array
///
/// # Errors
///
/// Returns [`Error::InvalidJson`] for every failure: text that is not JSON, no `d` object, no
/// `results` key, or malformed `results` containers at any depth.
pub fn extract_collection(response: &str) -> Result<String> {
    debug!(response_len = response.len(), "Extracting collection");

    let output = wrap_invalid_json(collection_from(response)).inspect_err(|report| {
        debug!(error = %report.current_context(), "Collection extraction failed");
    })?;

    debug!(output_len = output.len(), "Extracted collection");
    Ok(output)
}

/// Extract the `$skiptoken` value of the `d.__next` continuation link
///
/// - `Some("")` when the payload has no `__next` key, meaning there are no further pages.
/// - `None` when `__next` is present but carries no `$skiptoken` parameter.
/// - `Some(token)` otherwise.
///
/// # Errors
///
/// Returns [`Error::InvalidJson`] if the text is not JSON, has no `d` object, or has a
/// `__next` value that is an array or object.
pub fn extract_skip_token(response: &str) -> Result<Option<String>> {
    debug!(response_len = response.len(), "Extracting skip token");

    let token = wrap_invalid_json(skip_token_from(response)).inspect_err(|report| {
        debug!(error = %report.current_context(), "Skip token extraction failed");
    })?;

    debug!(?token, "Extracted skip token");
    Ok(token)
}

fn object_from(response: &str) -> Result<String> {
    let payload = parse_payload(response)?;
    let normalized = normalize(Value::Object(payload))?;
    to_compact_json(&normalized)
}

fn collection_from(response: &str) -> Result<String> {
    let payload = parse_payload(response)?;
    if !payload.has_field(ODataField::Results) {
        return Err(Report::new(Error::missing("results")));
    }

    let normalized = normalize(Value::Object(payload))?;
    to_compact_json(&normalized)
}

fn skip_token_from(response: &str) -> Result<Option<String>> {
    let payload = parse_payload(response)?;
    let Some(next) = payload.get_field(ODataField::Next) else {
        return Ok(Some(String::new()));
    };

    find_skip_token(&next_link_text(next)?)
}

/// Parse the response and take the object under the `d` key
///
/// Every root value must be an object or null, not only `d`.
fn parse_payload(response: &str) -> Result<Map<String, Value>> {
    let root: Value = serde_json::from_str(response).map_err(|error| {
        let context = Error::failed_to("parse response", &error);
        Report::new(error).change_context(context)
    })?;

    let mut root = match root {
        Value::Object(root) => root,
        other => {
            return Err(Report::new(Error::unexpected(
                "response",
                format!("expected an object, found {}", json_type_name(&other)),
            )));
        }
    };

    if let Some((key, value)) = root
        .iter()
        .find(|(_, value)| !(value.is_object() || value.is_null()))
    {
        return Err(Report::new(Error::unexpected(
            "response",
            format!("root key '{key}' is {}, expected an object", json_type_name(value)),
        )));
    }

    match root.remove(ODataField::Envelope.as_ref()) {
        Some(Value::Object(payload)) => Ok(payload),
        Some(other) => Err(Report::new(Error::unexpected(
            "envelope value",
            format!("expected an object, found {}", json_type_name(&other)),
        ))),
        None => Err(Report::new(Error::missing_key(ODataField::Envelope))),
    }
}

fn to_compact_json(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(|error| {
        let context = Error::failed_to("serialize normalized JSON", &error);
        Report::new(error).change_context(context)
    })
}
