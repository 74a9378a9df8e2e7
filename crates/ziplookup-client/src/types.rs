//! Lookup Service wire types.
//!
//! Successful responses are kept as raw JSON (see
//! [`ziplookup_core::ResultSet`]); only the request body and the error body
//! are modelled here.

use serde::{Deserialize, Serialize};

/// Request body for the lookup `POST`.
///
/// The field is named `zip_code` for compatibility with the deployed service,
/// but it carries the raw, unparsed address string the user typed.
#[derive(Debug, Serialize)]
pub struct LookupRequest<'a> {
    pub zip_code: &'a str,
}

/// Optional body of a non-2xx response: `{ "error": "..." }`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Extracts a non-blank `error` string from a raw response body.
    ///
    /// Returns `None` for bodies that are not JSON or carry no message.
    #[must_use]
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
