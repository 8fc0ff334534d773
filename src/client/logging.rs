//! Request and response body logging in debug mode

use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, enabled, Level};

use crate::common::redact_json;

/// Log an outgoing request with its (redacted) JSON body
pub fn log_request(method: &Method, path: &str, body: Option<&Value>, has_token: bool) {
    if !enabled!(Level::DEBUG) {
        return;
    }

    match body {
        Some(json) => {
            let redacted = redact_json(json);
            debug!(
                method = %method,
                path = %path,
                authorized = has_token,
                request_body = %serde_json::to_string_pretty(&redacted).unwrap_or_else(|_| redacted.to_string()),
                "📤 Request"
            );
        }
        None => {
            debug!(method = %method, path = %path, authorized = has_token, "📤 Request");
        }
    }
}

/// Log a response body, pretty-printed when it is JSON
pub fn log_response(method: &Method, path: &str, status: StatusCode, bytes: &[u8], elapsed: Duration) {
    if !enabled!(Level::DEBUG) {
        return;
    }

    let elapsed_ms = elapsed.as_millis() as u64;

    if bytes.is_empty() {
        debug!(method = %method, path = %path, status = %status, elapsed_ms, "📥 Response");
        return;
    }

    if let Ok(body_str) = std::str::from_utf8(bytes) {
        if let Ok(json) = serde_json::from_str::<Value>(body_str) {
            let redacted = redact_json(&json);
            debug!(
                method = %method,
                path = %path,
                status = %status,
                elapsed_ms,
                response_body = %serde_json::to_string_pretty(&redacted).unwrap_or_else(|_| body_str.to_string()),
                "📥 Response"
            );
        } else {
            debug!(
                method = %method,
                path = %path,
                status = %status,
                elapsed_ms,
                response_body = %body_str,
                "📥 Response"
            );
        }
    } else {
        debug!(
            method = %method,
            path = %path,
            status = %status,
            elapsed_ms,
            bytes = bytes.len(),
            "📥 Response (binary)"
        );
    }
}
