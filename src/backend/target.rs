//! Backend target resolution.
//!
//! # Responsibilities
//! - Turn the configured backend address into a usable base URL
//! - Fall back to the local default when nothing is configured
//! - Build endpoint URLs (`/health`, `/highlight-pdf`) from the base
//!
//! # Design Decisions
//! - Resolution is pure: the configured value is passed in, never read from the environment here
//! - Resolution is total: every input yields a target, there is no error path
//! - Scheme detection is case-insensitive so `HTTPS://host` is not double-prefixed

use std::fmt;

/// Address used when no backend is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

const HTTP_SCHEME: &str = "http://";
const HTTPS_SCHEME: &str = "https://";

/// Resolved base address of the processing backend.
///
/// Always starts with `http://` or `https://` and never ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BackendTarget(String);

impl BackendTarget {
    /// Resolve a target from an optional configured address.
    ///
    /// Blank values are treated the same as a missing value.
    pub fn resolve(configured: Option<&str>) -> Self {
        let value = configured.map(str::trim).filter(|v| !v.is_empty());

        let Some(value) = value else {
            return Self(DEFAULT_BACKEND_URL.to_string());
        };

        let with_scheme = if has_scheme(value) {
            value.to_string()
        } else {
            format!("{}{}", HTTP_SCHEME, value)
        };

        Self(with_scheme.trim_end_matches('/').to_string())
    }

    /// Full URL of an endpoint on this backend.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.0, path)
        } else {
            format!("{}/{}", self.0, path)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BackendTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn has_scheme(value: &str) -> bool {
    starts_with_ignore_case(value, HTTP_SCHEME) || starts_with_ignore_case(value, HTTPS_SCHEME)
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_uses_default() {
        assert_eq!(BackendTarget::resolve(None).as_str(), "http://localhost:8000");
        assert_eq!(BackendTarget::resolve(Some("")).as_str(), "http://localhost:8000");
        assert_eq!(BackendTarget::resolve(Some("   ")).as_str(), "http://localhost:8000");
    }

    #[test]
    fn test_bare_host_gets_http_scheme() {
        let target = BackendTarget::resolve(Some("backend.example.com"));
        assert_eq!(target.as_str(), "http://backend.example.com");

        let target = BackendTarget::resolve(Some("10.0.0.5:8000"));
        assert_eq!(target.as_str(), "http://10.0.0.5:8000");
    }

    #[test]
    fn test_existing_scheme_is_kept() {
        let target = BackendTarget::resolve(Some("https://api.example.com"));
        assert_eq!(target.as_str(), "https://api.example.com");

        let target = BackendTarget::resolve(Some("HTTP://Internal:9000"));
        assert_eq!(target.as_str(), "HTTP://Internal:9000");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let inputs = [
            "backend.example.com",
            "http://backend:8000/",
            "https://secure.example.com",
            "  padded.example.com  ",
        ];
        for input in inputs {
            let once = BackendTarget::resolve(Some(input));
            let twice = BackendTarget::resolve(Some(once.as_str()));
            assert_eq!(once, twice, "input: {input}");
            assert!(once.as_str().starts_with("http://") || once.as_str().starts_with("https://"));
        }
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let target = BackendTarget::resolve(Some("http://backend:8000/"));
        assert_eq!(target.endpoint("/health"), "http://backend:8000/health");
        assert_eq!(target.endpoint("highlight-pdf"), "http://backend:8000/highlight-pdf");
    }

    #[test]
    fn test_scheme_like_host_is_not_mistaken_for_scheme() {
        // "httpbin.org" starts with "http" but has no scheme separator
        let target = BackendTarget::resolve(Some("httpbin.org"));
        assert_eq!(target.as_str(), "http://httpbin.org");
    }
}
