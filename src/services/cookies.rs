use crate::config::SessionConfig;

/// SameSite cookie attribute for CSRF protection
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    /// Strict mode - cookie not sent with cross-site requests
    Strict,
    /// Lax mode - cookie sent with top-level navigations
    Lax,
    /// None mode - cookie sent with all requests (requires Secure)
    None,
}

impl SameSite {
    fn as_str(self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Extract specific cookie value from Cookie header
///
/// # Arguments
/// * `cookie_str` - Cookie header value
/// * `cookie_name` - Name of the cookie to extract
///
/// # Returns
/// * `Some(value)` - Cookie value if found
/// * `None` - Cookie not found
pub fn extract_cookie_value(cookie_str: &str, cookie_name: &str) -> Option<String> {
    cookie_str
        .split(';')
        .map(|s| s.trim())
        .find_map(|cookie| {
            cookie
                .strip_prefix(cookie_name)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .map(|value| value.to_string())
}

/// Builds a Set-Cookie header value for the session token
///
/// # Example
/// ```rust
/// use telemed::config::SessionConfig;
/// use telemed::services::cookies::build_session_cookie;
///
/// let cookie = build_session_cookie("abc123", &SessionConfig::default());
/// assert_eq!(cookie, "session=abc123; HttpOnly; SameSite=Lax; Path=/; Max-Age=604800");
/// ```
pub fn build_session_cookie(token: &str, config: &SessionConfig) -> String {
    format!(
        "{}={}; HttpOnly{}; SameSite={}; Path=/; Max-Age={}",
        config.cookie_name,
        token,
        if config.secure { "; Secure" } else { "" },
        config.same_site.as_str(),
        config.ttl_seconds
    )
}

/// Builds a Set-Cookie header value that clears the session cookie
///
/// Used during logout to invalidate the cookie by setting Max-Age=0
pub fn build_clear_session_cookie(config: &SessionConfig) -> String {
    format!(
        "{}=; HttpOnly{}; SameSite={}; Path=/; Max-Age=0",
        config.cookie_name,
        if config.secure { "; Secure" } else { "" },
        config.same_site.as_str(),
    )
}
