//! Normalization of `d`-wrapped OData API responses
//!
//! APIs following this convention wrap every payload in a root `{"d": ...}` object, nest
//! collections under a `results` array, mark unexpanded navigation properties with a
//! `__deferred` placeholder, and announce further pages through a `__next` link carrying a
//! `$skiptoken` parameter. This crate strips those artifacts and returns plain, compact JSON
//! text ready for typed deserialization.
//!
//! # Usage
//!
//! ```
//! let response = r#"{"d":{"results":[{"ID":1,"Lines":{"__deferred":{"uri":"x"}}}],
//!     "__next":"https://host/api/Items?$skiptoken=guid'1'"}}"#;
//!
//! let items = odata_envelope::extract_collection(response)?;
//! assert_eq!(items, r#"[{"ID":1,"Lines":[]}]"#);
//!
//! let token = odata_envelope::extract_skip_token(response)?;
//! assert_eq!(token.as_deref(), Some("guid'1'"));
//! # Ok::<(), error_stack::Report<odata_envelope::Error>>(())
//! ```
//!
//! Numbers are carried as their literal text, so no locale or float formatting applies on the
//! way through.

mod constants;
mod error;
mod extraction;
mod json_field_access;

pub use constants::ODataField;
pub use error::{Error, Result};
pub use extraction::{extract_collection, extract_object, extract_skip_token};
pub use json_field_access::JsonFieldAccess;
