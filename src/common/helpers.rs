// Helper functions for safe logging

use serde_json::Value;

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// use empleaworks::common::safe_email_log;
/// let masked = safe_email_log("user@example.com");
/// assert_eq!(masked, "u***@example.com");
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.chars().count() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            let first: String = parts[0].chars().take(1).collect();
            format!("{}***@{}", first, parts[1])
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

/// Masks tokens for safe logging
/// Shows only first and last 4 characters, counted in chars
///
/// # Example
/// ```
/// use empleaworks::common::safe_token_log;
/// let masked = safe_token_log("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
/// assert_eq!(masked, "eyJh...VCJ9");
/// ```
pub fn safe_token_log(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "***".to_string()
    }
}

/// Replaces secrets in a JSON body before it is logged
pub fn redact_json(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, v)| {
                    let lowered = key.to_lowercase();
                    let redacted = if lowered.contains("password") || lowered.contains("token") {
                        Value::String("***".to_string())
                    } else if lowered == "email" {
                        v.as_str()
                            .map(|e| Value::String(safe_email_log(e)))
                            .unwrap_or_else(|| redact_json(v))
                    } else {
                        redact_json(v)
                    };
                    (key.clone(), redacted)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(redact_json).collect()),
        other => other.clone(),
    }
}
