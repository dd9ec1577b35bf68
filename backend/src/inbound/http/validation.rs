//! Path parameter validation for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{Error, ListId};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidUuid,
    InvalidIndex,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidIndex => "invalid_index",
        }
    }
}

fn invalid_field(field: &str, message: String, code: ErrorCode, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "value": value,
        "code": code.as_str(),
    }))
}

/// Parse a list identifier from a path segment.
pub(crate) fn parse_list_id(raw: &str) -> Result<ListId, Error> {
    raw.parse().map_err(|_| {
        invalid_field(
            "id",
            "id must be a valid UUID".to_owned(),
            ErrorCode::InvalidUuid,
            raw,
        )
    })
}

/// Parse a zero-based item position. Negative and non-numeric values fail.
pub(crate) fn parse_item_index(raw: &str) -> Result<usize, Error> {
    raw.parse().map_err(|_| {
        invalid_field(
            "index",
            "index must be a non-negative integer".to_owned(),
            ErrorCode::InvalidIndex,
            raw,
        )
    })
}
