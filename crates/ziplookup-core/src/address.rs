//! Free-text address parsing.
//!
//! Addresses are entered as `<street> <house number>, <city>` (digits may appear
//! anywhere before the comma, e.g. `5 הורדים, ירושלים`). Parsing splits on the
//! single comma, collects every digit run of the street segment into the house
//! number, and keeps the remaining text as the street name. Nothing is
//! normalized beyond a trim of each component.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// ASCII digits only; Unicode `\d` would also match Arabic-Indic numerals.
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid digit-run regex"));

/// Why a raw address could not be turned into a [`ParsedAddress`].
///
/// The `Display` text is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Invalid address format: please separate city and street with a comma")]
    Format,

    #[error("no house number provided")]
    MissingHouseNumber,

    #[error("no street name provided")]
    MissingStreetName,

    #[error("no city provided")]
    MissingCity,
}

/// A raw address split into its three components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    /// Every digit run of the street segment, concatenated in order.
    pub house_number: String,
    pub street_name: String,
    pub city_name: String,
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}",
            self.street_name, self.house_number, self.city_name
        )
    }
}

impl FromStr for ParsedAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

/// Parses and validates a raw address.
///
/// # Errors
///
/// Checked in order:
/// - [`AddressError::Format`] unless `raw` contains exactly one comma.
/// - [`AddressError::MissingHouseNumber`] if the street segment has no digits.
/// - [`AddressError::MissingStreetName`] if nothing but digits and whitespace
///   precede the comma.
/// - [`AddressError::MissingCity`] if the city segment is blank.
pub fn parse_address(raw: &str) -> Result<ParsedAddress, AddressError> {
    if raw.matches(',').count() != 1 {
        return Err(AddressError::Format);
    }
    let (street_segment, city_segment) = raw.split_once(',').ok_or(AddressError::Format)?;

    let house_number: String = DIGIT_RUN
        .find_iter(street_segment)
        .map(|m| m.as_str())
        .collect();
    if house_number.is_empty() {
        return Err(AddressError::MissingHouseNumber);
    }

    let street_name = DIGIT_RUN.replace_all(street_segment, "").trim().to_string();
    if street_name.is_empty() {
        return Err(AddressError::MissingStreetName);
    }

    let city_name = city_segment.trim().to_string();
    if city_name.is_empty() {
        return Err(AddressError::MissingCity);
    }

    Ok(ParsedAddress {
        house_number,
        street_name,
        city_name,
    })
}

#[cfg(test)]
#[path = "address_test.rs"]
mod tests;
