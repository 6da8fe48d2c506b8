use jarvis::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_transcript_when_sanitizing_then_returns_trimmed() {
    assert_eq!(
        sanitize_prompt("  Where is the counter?  "),
        "Where is the counter?"
    );
}

#[test]
fn given_long_transcript_when_sanitizing_then_truncates_with_length() {
    let transcript = "a".repeat(150);
    let result = sanitize_prompt(&transcript);

    assert!(result.starts_with(&"a".repeat(100)));
    assert!(result.ends_with("... (150 chars total)"));
}

#[test]
fn given_multibyte_text_when_truncating_then_cuts_on_char_boundary() {
    let transcript = "é".repeat(120);
    let result = sanitize_prompt(&transcript);

    assert!(result.starts_with(&"é".repeat(100)));
    assert!(result.contains("(120 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let result = sanitize_prompt("Authorization: Bearer gsk-abc123xyz");

    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("gsk-abc123xyz"));
}

#[test]
fn given_repeated_secrets_when_sanitizing_then_redacts_every_occurrence() {
    let result = sanitize_prompt("password=one and later password=two");

    assert_eq!(
        result,
        "password=[REDACTED] and later password=[REDACTED]"
    );
}

#[test]
fn given_query_string_when_sanitizing_then_stops_at_ampersand() {
    let result = sanitize_prompt("url?api_key=secret123&mode=fast");

    assert_eq!(result, "url?api_key=[REDACTED]&mode=fast");
}
