//! Helpers shared by the reqwest-backed lookup adapters.

/// Collapse whitespace and truncate a response body for error messages.
pub(crate) fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

/// `status N` or `status N: preview` for a failed response.
pub(crate) fn status_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    let preview = body_preview(body);
    if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn preview_compacts_whitespace() {
        assert_eq!(body_preview(b"  {\n  \"erro\": true\n}  "), "{ \"erro\": true }");
    }

    #[test]
    fn preview_truncates_long_bodies() {
        let body = "x".repeat(200);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn status_message_omits_empty_body() {
        assert_eq!(status_message(StatusCode::BAD_GATEWAY, b""), "status 502");
        assert_eq!(
            status_message(StatusCode::UNAUTHORIZED, b"invalid key"),
            "status 401: invalid key"
        );
    }
}
