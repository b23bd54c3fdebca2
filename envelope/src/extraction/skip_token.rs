//! Reading the `$skiptoken` cursor out of a `__next` continuation link

use std::borrow::Cow;

use error_stack::Report;
use serde_json::Value;

use super::normalize::json_type_name;
use crate::constants::SKIP_TOKEN_REGEX;
use crate::error::{Error, Result};

/// Text of a `__next` value
///
/// Strings are used as-is, null reads as an empty link, and numbers or booleans read as their
/// JSON text. Arrays and objects are not links.
pub(super) fn next_link_text(next: &Value) -> Result<Cow<'_, str>> {
    match next {
        Value::String(link) => Ok(Cow::Borrowed(link.as_str())),
        Value::Null => Ok(Cow::Borrowed("")),
        Value::Bool(_) | Value::Number(_) => Ok(Cow::Owned(next.to_string())),
        Value::Array(_) | Value::Object(_) => Err(Report::new(Error::unexpected(
            "__next value",
            format!("expected a string, found {}", json_type_name(next)),
        ))),
    }
}

/// First `$skiptoken` value in `link`, `None` if the link carries no skip token
pub(super) fn find_skip_token(link: &str) -> Result<Option<String>> {
    let regex = SKIP_TOKEN_REGEX
        .as_ref()
        .ok_or_else(|| Report::new(Error::failed_to("compile skip token pattern", "invalid regex")))?;

    Ok(regex
        .captures(link)
        .and_then(|captures| captures.get(1))
        .map(|token| token.as_str().to_string()))
}
