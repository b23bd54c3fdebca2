use thiserror::Error;

// Error message prefixes
const MSG_FAILED_TO_PREFIX: &str = "Failed to";
const MSG_MISSING_PREFIX: &str = "Missing";
const MSG_UNEXPECTED_PREFIX: &str = "Unexpected";

/// Result type for the `odata_envelope` library
pub type Result<T> = std::result::Result<T, error_stack::Report<Error>>;

/// Failure kinds reported by the extraction operations
///
/// `extract_object` reports [`Error::Structure`] directly. `extract_collection` and
/// `extract_skip_token` wrap every failure, whatever its source, in [`Error::InvalidJson`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The response text is not JSON, or is JSON of the wrong shape
    #[error("Malformed response: {0}")]
    Structure(String),

    /// A failure raised while extracting a collection or skip token
    #[error("Incorrect JSON: {0}")]
    InvalidJson(String),

    /// The response parsed but lacks the data the operation needs
    #[error("Missing data: {0}")]
    MissingData(String),
}

impl Error {
    /// Create a structure error for a failed step
    pub fn failed_to(action: &str, details: impl std::fmt::Display) -> Self {
        Self::Structure(format!("{MSG_FAILED_TO_PREFIX} {action}: {details}"))
    }

    /// Create a structure error for a value of the wrong JSON type
    pub fn unexpected(what: &str, details: impl std::fmt::Display) -> Self {
        Self::Structure(format!("{MSG_UNEXPECTED_PREFIX} {what}: {details}"))
    }

    /// Create a structure error for an absent mandatory key
    pub fn missing_key(key: impl std::fmt::Display) -> Self {
        Self::Structure(format!("{MSG_MISSING_PREFIX} key '{key}'"))
    }

    /// Create a missing data error for content the response does not have
    pub fn missing(what: &str) -> Self {
        Self::MissingData(format!("response has no {what}"))
    }

    /// Wrap the message of an underlying failure as an invalid JSON error
    pub fn invalid_json(cause: &Self) -> Self {
        Self::InvalidJson(cause.to_string())
    }

    /// The message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Structure(s) | Self::InvalidJson(s) | Self::MissingData(s) => s,
        }
    }
}

/// Re-signal any failure in `result` as [`Error::InvalidJson`] carrying the original message
///
/// The original report is kept as the cause frame.
pub(crate) fn wrap_invalid_json<T>(result: Result<T>) -> Result<T> {
    result.map_err(|report| {
        let context = Error::invalid_json(report.current_context());
        report.change_context(context)
    })
}

#[cfg(test)]
mod tests {
    use error_stack::Report;

    use super::*;

    #[test]
    fn test_wrap_invalid_json_keeps_original_message() {
        let failed: Result<()> = Err(Report::new(Error::missing("results")));

        let wrapped = wrap_invalid_json(failed).unwrap_err();

        assert_eq!(
            wrapped.current_context(),
            &Error::InvalidJson("Missing data: response has no results".to_string())
        );
        assert!(wrapped.downcast_ref::<Error>().is_some());
    }

    #[test]
    fn test_wrap_invalid_json_passes_success_through() {
        let ok: Result<u8> = Ok(7);
        assert_eq!(wrap_invalid_json(ok).unwrap(), 7);
    }

    #[test]
    fn test_message_strips_kind_prefix() {
        let error = Error::missing_key("d");
        assert_eq!(error.message(), "Missing key 'd'");
        assert_eq!(error.to_string(), "Malformed response: Missing key 'd'");
    }
}
