use super::*;

#[test]
fn parses_street_then_house_number() {
    let parsed = parse_address("הורדים 5, ירושלים").expect("valid address");
    assert_eq!(
        parsed,
        ParsedAddress {
            house_number: "5".to_string(),
            street_name: "הורדים".to_string(),
            city_name: "ירושלים".to_string(),
        }
    );
}

#[test]
fn digit_stripping_is_order_independent() {
    let parsed = parse_address("5 הורדים, ירושלים").expect("valid address");
    assert_eq!(parsed.house_number, "5");
    assert_eq!(parsed.street_name, "הורדים");
    assert_eq!(parsed.city_name, "ירושלים");
}

#[test]
fn concatenates_multiple_digit_runs() {
    let parsed = parse_address("Herzl 12 apt 3, Haifa").expect("valid address");
    assert_eq!(parsed.house_number, "123");
    // internal whitespace is left alone
    assert_eq!(parsed.street_name, "Herzl  apt");
}

#[test]
fn preserves_case_of_components() {
    let parsed = parse_address("  King GEORGE 20 ,  Tel Aviv  ").expect("valid address");
    assert_eq!(parsed.street_name, "King GEORGE");
    assert_eq!(parsed.city_name, "Tel Aviv");
}

#[test]
fn rejects_strings_without_a_comma() {
    for raw in ["", "הורדים 5 ירושלים", "Herzl 12", "   "] {
        assert_eq!(
            parse_address(raw),
            Err(AddressError::Format),
            "expected format error for {raw:?}"
        );
    }
}

#[test]
fn rejects_strings_with_more_than_one_comma() {
    for raw in ["הורדים 5, ירושלים, ישראל", "a 1,,b", ",,"] {
        assert_eq!(
            parse_address(raw),
            Err(AddressError::Format),
            "expected format error for {raw:?}"
        );
    }
}

#[test]
fn format_error_mentions_the_comma() {
    let msg = AddressError::Format.to_string();
    assert!(msg.contains("separate city and street with a comma"), "{msg}");
}

#[test]
fn rejects_street_segment_without_digits() {
    for raw in ["הורדים, ירושלים", "Herzl, Haifa", " , Haifa"] {
        let err = parse_address(raw).unwrap_err();
        assert_eq!(err, AddressError::MissingHouseNumber, "for {raw:?}");
        assert_eq!(err.to_string(), "no house number provided");
    }
}

#[test]
fn rejects_street_segment_with_only_digits() {
    let err = parse_address(" 12 34 , Haifa").unwrap_err();
    assert_eq!(err, AddressError::MissingStreetName);
    assert_eq!(err.to_string(), "no street name provided");
}

#[test]
fn rejects_blank_city() {
    let err = parse_address("Herzl 12,   ").unwrap_err();
    assert_eq!(err, AddressError::MissingCity);
    assert_eq!(err.to_string(), "no city provided");
}

#[test]
fn non_ascii_digits_are_not_house_numbers() {
    // Arabic-Indic five
    let err = parse_address("הורדים ٥, ירושלים").unwrap_err();
    assert_eq!(err, AddressError::MissingHouseNumber);
}

#[test]
fn parsing_is_idempotent() {
    let raw = "הורדים 5, ירושלים";
    assert_eq!(parse_address(raw), parse_address(raw));
}

#[test]
fn from_str_and_display() {
    let parsed: ParsedAddress = "Herzl 12, Haifa".parse().expect("valid address");
    assert_eq!(parsed.to_string(), "Herzl 12, Haifa");
}
