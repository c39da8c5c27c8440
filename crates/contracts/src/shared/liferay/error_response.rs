use serde::Deserialize;

/// Error body returned by the host on a rejected request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Extract `message` from a raw response body, if there is one
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.message)
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_body() {
        assert_eq!(
            ErrorResponse::message_from_body(r#"{"message":"Vendor is required","status":"BAD_REQUEST"}"#),
            Some("Vendor is required".to_string())
        );
        assert_eq!(ErrorResponse::message_from_body(r#"{"status":500}"#), None);
        assert_eq!(ErrorResponse::message_from_body("<html>oops</html>"), None);
        assert_eq!(ErrorResponse::message_from_body(""), None);
    }
}
