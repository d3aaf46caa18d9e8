use axum::http::{header, HeaderMap};

use crate::config::AdminConfig;

/// Validates requests against the single static admin identity.
///
/// One username/password pair issues one opaque token; the token is compared
/// by exact string equality on every mutating request. There is no session
/// store, no expiry, and no revocation short of a process restart.
#[derive(Debug, Clone)]
pub struct AdminGuard {
    credentials: AdminConfig,
}

impl AdminGuard {
    pub fn new(credentials: AdminConfig) -> Self {
        Self { credentials }
    }

    /// Returns the admin token if both credentials match exactly
    /// (case-sensitive), `None` otherwise.
    pub fn login(&self, username: &str, password: &str) -> Option<&str> {
        if username == self.credentials.username && password == self.credentials.password {
            Some(&self.credentials.token)
        } else {
            None
        }
    }

    pub fn verify(&self, token: &str) -> bool {
        token == self.credentials.token
    }
}

/// Extract the bearer credential from the Authorization header.
///
/// Strips a `"Bearer "` prefix if present; otherwise the raw header value is
/// used as the token. A missing or non-UTF-8 header yields `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    Some(value.strip_prefix("Bearer ").unwrap_or(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn guard() -> AdminGuard {
        AdminGuard::new(AdminConfig {
            username: "admin".to_string(),
            password: "123".to_string(),
            token: "secret-admin-token-12345".to_string(),
        })
    }

    #[test]
    fn login_with_matching_credentials_issues_token() {
        assert_eq!(guard().login("admin", "123"), Some("secret-admin-token-12345"));
    }

    #[test]
    fn login_is_case_sensitive() {
        let g = guard();
        assert_eq!(g.login("Admin", "123"), None);
        assert_eq!(g.login("admin", "1234"), None);
        assert_eq!(g.login("", ""), None);
    }

    #[test]
    fn verify_requires_exact_token() {
        let g = guard();
        assert!(g.verify("secret-admin-token-12345"));
        assert!(!g.verify("secret-admin-token-1234"));
        assert!(!g.verify(""));
    }

    #[test]
    fn bearer_token_strips_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert_eq!(bearer_token(&headers), Some("abc"));
    }

    #[test]
    fn bearer_token_without_prefix_is_used_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("abc"));
        assert_eq!(bearer_token(&headers), Some("abc"));
    }

    #[test]
    fn bearer_token_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
