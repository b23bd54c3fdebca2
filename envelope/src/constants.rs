//! Key names and patterns of the `d`-envelope response convention

use std::sync::LazyLock;

use regex::Regex;
use strum::AsRefStr;
use strum::Display;

/// Marker keys the API places in its responses
///
/// Used with [`crate::JsonFieldAccess`] to avoid hardcoded strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum ODataField {
    /// The envelope key wrapping every response payload
    #[strum(serialize = "d")]
    Envelope,
    /// The container holding the entities of a collection
    #[strum(serialize = "results")]
    Results,
    /// The placeholder of a navigation property that was not expanded
    #[strum(serialize = "__deferred")]
    Deferred,
    /// The continuation link present when more pages exist
    #[strum(serialize = "__next")]
    Next,
}

/// Pattern capturing the value of the `$skiptoken` query parameter
const SKIP_TOKEN_PATTERN: &str = r"\$skiptoken=([^&#]*)";

/// Compiled skip token pattern, `None` only if the constant pattern fails to compile
pub(crate) static SKIP_TOKEN_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(SKIP_TOKEN_PATTERN).ok());
