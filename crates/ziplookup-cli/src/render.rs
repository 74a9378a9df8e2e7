//! Result rendering for the terminal.
//!
//! Candidates are printed in the order the Lookup Service ranked them; nothing
//! is re-sorted or filtered here.

use std::io::{self, Write};

use ziplookup_core::ResultSet;
use ziplookup_search::RenderInput;

/// Prints one block per candidate. Prints nothing unless the search succeeded
/// with at least one hit.
pub(crate) fn render<W: Write>(out: &mut W, input: RenderInput<'_>) -> io::Result<()> {
    let Some(results) = input.results else {
        return Ok(());
    };
    if results.is_empty() {
        return Ok(());
    }

    for candidate in results.candidates() {
        writeln!(out, "{}", candidate.city_name)?;
        writeln!(out, "  Street: {}", candidate.street_name)?;
        writeln!(out, "  House Number: {}", candidate.house_number)?;
        writeln!(out, "  Entrance: {}", candidate.entrance)?;
        if let Some(score) = candidate.score {
            writeln!(out, "  Score: {score:.2}")?;
        }
        writeln!(out, "  ZIP Code: {}", candidate.zip_code)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints the service response body unchanged, pretty-printed.
pub(crate) fn render_json<W: Write>(out: &mut W, results: &ResultSet) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, results.as_value())?;
    writeln!(out)
}
