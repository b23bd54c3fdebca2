//! Extension trait for type-safe JSON field access
//!
//! Lets the extraction code look up keys with [`crate::ODataField`] (or any other
//! `AsRef<str>`) instead of scattering string literals.

use serde_json::{Map, Value};

/// Extension trait for type-safe JSON field access
pub trait JsonFieldAccess {
    /// Get field value using any type that can be a string reference
    fn get_field<T: AsRef<str>>(&self, field: T) -> Option<&Value>;

    /// Whether the field is present, whatever its value
    fn has_field<T: AsRef<str>>(&self, field: T) -> bool {
        self.get_field(field).is_some()
    }

    /// Get field value as object
    fn get_field_object<T: AsRef<str>>(&self, field: T) -> Option<&Map<String, Value>> {
        self.get_field(field).and_then(Value::as_object)
    }
}

impl JsonFieldAccess for Value {
    fn get_field<T: AsRef<str>>(&self, field: T) -> Option<&Self> {
        self.get(field.as_ref())
    }
}

impl JsonFieldAccess for Map<String, Value> {
    fn get_field<T: AsRef<str>>(&self, field: T) -> Option<&Value> {
        self.get(field.as_ref())
    }
}
