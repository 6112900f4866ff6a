const MAX_VISIBLE_CHARS: usize = 120;

/// Prepares prompt or transcript text for logging: truncates long content
/// on a character boundary and redacts credential-looking fragments.
pub fn sanitize_prompt(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total_chars)
    } else {
        trimmed.to_string()
    };

    redact_credentials(&visible)
}

fn redact_credentials(text: &str) -> String {
    let prefixes = [
        "Bearer ",
        "api_key=",
        "client_secret=",
        "access_token=",
        "password=",
    ];

    let mut result = text.to_string();
    for prefix in prefixes {
        if let Some(idx) = result.find(prefix) {
            let value_start = idx + prefix.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\''))
                .map(|offset| value_start + offset)
                .unwrap_or(result.len());
            result.replace_range(value_start..value_end, "[REDACTED]");
        }
    }

    result
}
