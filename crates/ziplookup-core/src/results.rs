//! Lookup Service result sets.
//!
//! The service answers with a search-engine style envelope:
//!
//! ```json
//! { "hits": { "total": { "value": 1 },
//!             "hits": [ { "_score": 7.1,
//!                         "_source": { "city_name": "...", "street_name": "...",
//!                                      "house_number": "5", "entrance": "",
//!                                      "zip_code": 9640105 } } ] } }
//! ```
//!
//! [`ResultSet`] keeps the body untouched and only interprets it for the
//! emptiness check and the read-only [`ResultSet::candidates`] projection.

use serde::Serialize;
use serde_json::Value;

/// The raw response body of one successful lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    body: Value,
}

/// One candidate record, flattened from a hit for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub city_name: String,
    pub street_name: String,
    pub house_number: String,
    pub entrance: String,
    pub zip_code: String,
    pub score: Option<f64>,
}

impl ResultSet {
    #[must_use]
    pub fn from_value(body: Value) -> Self {
        Self { body }
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.body
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.body
    }

    /// Reported hit count.
    ///
    /// Reads `hits.total.value`, falling back to a bare numeric `hits.total`
    /// and then to the length of `hits.hits`.
    #[must_use]
    pub fn total(&self) -> u64 {
        let total = self.body.pointer("/hits/total");
        total
            .and_then(|t| t.get("value"))
            .and_then(Value::as_u64)
            .or_else(|| total.and_then(Value::as_u64))
            .unwrap_or_else(|| self.hits().len() as u64)
    }

    /// `true` when the service reported zero hits or returned no hit list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0 || self.hits().is_empty()
    }

    /// Hits projected into [`Candidate`]s, in the order the service ranked them.
    #[must_use]
    pub fn candidates(&self) -> Vec<Candidate> {
        self.hits().iter().filter_map(candidate_from_hit).collect()
    }

    fn hits(&self) -> &[Value] {
        self.body
            .pointer("/hits/hits")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn candidate_from_hit(hit: &Value) -> Option<Candidate> {
    let source = hit.get("_source")?;
    let field = |name: &str| {
        source
            .get(name)
            .and_then(value_as_string)
            .unwrap_or_default()
    };

    Some(Candidate {
        city_name: field("city_name"),
        street_name: field("street_name"),
        house_number: field("house_number"),
        entrance: field("entrance"),
        zip_code: field("zip_code"),
        score: hit.get("_score").and_then(Value::as_f64),
    })
}

/// The index stores some fields as integers (ZIP codes, house numbers), so
/// accept either representation.
fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
