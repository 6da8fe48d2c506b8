const MAX_VISIBLE_CHARS: usize = 100;

const SENSITIVE_PREFIXES: [&str; 5] = ["Bearer ", "api_key=", "password=", "secret=", "token="];

/// Shortens user-supplied text and masks credentials so it can be logged.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let cut = trimmed
            .char_indices()
            .nth(MAX_VISIBLE_CHARS)
            .map(|(idx, _)| idx)
            .unwrap_or(trimmed.len());
        format!("{}... ({} chars total)", &trimmed[..cut], total_chars)
    } else {
        trimmed.to_string()
    };

    SENSITIVE_PREFIXES
        .iter()
        .fold(visible, |text, prefix| redact_after(&text, prefix))
}

fn redact_after(text: &str, prefix: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(prefix) {
        let value_start = idx + prefix.len();
        result.push_str(&rest[..value_start]);
        result.push_str("[REDACTED]");
        let value_end = rest[value_start..]
            .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\''))
            .map(|i| value_start + i)
            .unwrap_or(rest.len());
        rest = &rest[value_end..];
    }

    result.push_str(rest);
    result
}
