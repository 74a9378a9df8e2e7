use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["ziplookup"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.api_url.is_none());
}

#[test]
fn parses_interactive_command() {
    let cli = Cli::try_parse_from(["ziplookup", "interactive"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Interactive)));
}

#[test]
fn search_joins_unquoted_address_words() {
    let cli = Cli::try_parse_from(["ziplookup", "search", "הורדים", "5,", "ירושלים"])
        .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Search { address, json }) => {
            assert_eq!(address.join(" "), "הורדים 5, ירושלים");
            assert!(!json);
        }
        other => panic!("expected search command, got {other:?}"),
    }
}

#[test]
fn search_accepts_json_flag() {
    let cli = Cli::try_parse_from(["ziplookup", "search", "--json", "Herzl 1, Haifa"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Search { json: true, ref address }) if address == &["Herzl 1, Haifa".to_string()]
    ));
}

#[test]
fn search_requires_an_address() {
    assert!(Cli::try_parse_from(["ziplookup", "search"]).is_err());
}

#[test]
fn api_url_is_global() {
    let cli = Cli::try_parse_from([
        "ziplookup",
        "parse",
        "Herzl 1, Haifa",
        "--api-url",
        "http://localhost:9000/zip",
    ])
    .expect("expected valid cli args");
    assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9000/zip"));
    assert!(matches!(cli.command, Some(Commands::Parse { .. })));
}
