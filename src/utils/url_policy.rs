//! Acceptance rules for target URLs.
//!
//! Long URLs are stored exactly as submitted; this module only decides
//! whether a URL may be shortened at all.

use url::Url;

/// Reasons a long URL is refused.
#[derive(Debug, thiserror::Error)]
pub enum UrlPolicyError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// Rejects `javascript:`, `data:`, `file:` and similar schemes, which would
/// otherwise be served back by the redirect endpoint.
///
/// # Errors
///
/// Returns [`UrlPolicyError`] describing the first rule violated.
///
/// # Examples
///
/// ```ignore
/// assert!(check_long_url("https://example.com/a?b=c#d").is_ok());
/// assert!(check_long_url("javascript:alert(1)").is_err());
/// ```
pub fn check_long_url(input: &str) -> Result<(), UrlPolicyError> {
    let url = Url::parse(input).map_err(|e| UrlPolicyError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlPolicyError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlPolicyError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(check_long_url("http://example.com").is_ok());
        assert!(check_long_url("https://example.com/path?q=1#frag").is_ok());
        assert!(check_long_url("https://EXAMPLE.com:8443/x").is_ok());
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(matches!(
            check_long_url("/just/a/path"),
            Err(UrlPolicyError::InvalidFormat(_))
        ));
        assert!(check_long_url("example.com").is_err());
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for input in [
            "javascript:alert(1)",
            "data:text/html,<b>hi</b>",
            "file:///etc/passwd",
            "ftp://example.com/file",
        ] {
            assert!(
                matches!(check_long_url(input), Err(UrlPolicyError::UnsupportedProtocol)),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(check_long_url("").is_err());
    }
}
