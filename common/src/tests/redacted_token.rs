use crate::RedactedToken;

/// **VALUE**: Verifies the bot token never leaks through Debug or Display.
///
/// **WHY THIS MATTERS**: Config structs are logged with `{:?}` at startup. A leaked token
/// lets anyone impersonate the bot.
///
/// **BUG THIS CATCHES**: Would catch someone replacing the manual impls with `#[derive(Debug)]`.
#[test]
fn given_token_when_formatted_then_value_is_hidden() {
    // GIVEN
    let token = RedactedToken::new("123456:ABC-secret");

    // WHEN
    let debug = format!("{token:?}");
    let display = format!("{token}");

    // THEN
    assert!(!debug.contains("secret"));
    assert!(!display.contains("secret"));
    assert_eq!(token.expose(), "123456:ABC-secret");
}

/// **VALUE**: Verifies serialization is refused.
///
/// **WHY THIS MATTERS**: Dumping the effective config back to disk must not write the token.
///
/// **BUG THIS CATCHES**: Would catch a derived `Serialize` slipping in.
#[test]
fn given_token_when_serialized_then_fails() {
    let token = RedactedToken::new("123456:ABC-secret");

    let result = serde_json::to_string(&token);

    assert!(result.is_err());
}

/// **VALUE**: Verifies whitespace-only tokens count as empty.
///
/// **WHY THIS MATTERS**: An env var set to a blank line should fail startup validation.
///
/// **BUG THIS CATCHES**: Would catch `is_empty()` checking raw length only.
#[test]
fn given_blank_token_when_checked_then_is_empty() {
    assert!(RedactedToken::new("   ").is_empty());
    assert!(RedactedToken::default().is_empty());
    assert!(!RedactedToken::new("x").is_empty());
}

/// **VALUE**: Verifies tokens can be read from config files.
///
/// **WHY THIS MATTERS**: `bot_token` lives in the TOML config.
///
/// **BUG THIS CATCHES**: Would catch a missing Deserialize impl.
#[test]
fn given_json_string_when_deserialized_then_token_is_populated() {
    let token: RedactedToken = serde_json::from_str("\"abc\"").unwrap();

    assert_eq!(token.expose(), "abc");
}
