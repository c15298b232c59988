//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::Error;

/// Build the validation error for a required body field that is absent.
///
/// The `details` object names the offending field so clients can act on
/// the failure programmatically.
pub(crate) fn missing_field_error(field: &'static str) -> Error {
    Error::validation(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}
