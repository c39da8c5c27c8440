//! Helpers for building host platform URLs
//!
//! Every request carries the auth token as the `p_auth` query parameter.

/// Build a full API URL from a base, a path and the auth token
///
/// # Example
/// ```rust,ignore
/// let url = api_url("", "/o/c/nobprequests/", "tok");
/// assert_eq!(url, "/o/c/nobprequests/?p_auth=tok");
/// ```
pub fn api_url(base: &str, path: &str, auth_token: &str) -> String {
    format!(
        "{}{}?p_auth={}",
        base.trim_end_matches('/'),
        path,
        urlencoding::encode(auth_token)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin() {
        assert_eq!(
            api_url("", "/o/c/nobprequests/", "abc"),
            "/o/c/nobprequests/?p_auth=abc"
        );
    }

    #[test]
    fn test_base_trailing_slash() {
        assert_eq!(
            api_url("https://portal.example.com/", "/o/c/nobprequests/", "abc"),
            "https://portal.example.com/o/c/nobprequests/?p_auth=abc"
        );
    }

    #[test]
    fn test_empty_token_still_sent() {
        assert_eq!(
            api_url("", "/o/headless-admin-user/v1.0/my-user-account", ""),
            "/o/headless-admin-user/v1.0/my-user-account?p_auth="
        );
    }

    #[test]
    fn test_token_is_encoded() {
        assert_eq!(api_url("", "/x", "a b&c"), "/x?p_auth=a%20b%26c");
    }
}
