//! Admin authentication gate.
//!
//! A single shared admin identity compared by equality against injected
//! configuration. On a successful login a token is minted as a fixed
//! prefix plus the current Unix-millisecond timestamp.
//!
//! Authorization is a format check only: any value starting with the
//! prefix is accepted, whether or not it was ever issued, and tokens
//! never expire. There is deliberately no session state.

use feedbackd_types::error::AuthError;

/// Literal prefix of every minted token, and the only thing
/// `authorize` verifies.
pub const TOKEN_PREFIX: &str = "simple-token-";

/// The configured administrator credential pair.
///
/// Sourced from configuration (flags or environment), never hardcoded
/// at the comparison site.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Auth gate holding the admin credentials.
#[derive(Debug, Clone)]
pub struct AdminAuth {
    credentials: AdminCredentials,
}

impl AdminAuth {
    pub fn new(credentials: AdminCredentials) -> Self {
        Self { credentials }
    }

    /// Check the presented pair against the configured credentials and
    /// mint a fresh token on match.
    pub fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if username == self.credentials.username && password == self.credentials.password {
            let token = format!("{TOKEN_PREFIX}{}", chrono::Utc::now().timestamp_millis());
            tracing::debug!("admin login succeeded");
            Ok(token)
        } else {
            tracing::warn!(username, "admin login rejected");
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Accept any present value beginning with [`TOKEN_PREFIX`].
///
/// The value is the raw `Authorization` header: no `Bearer ` scheme is
/// stripped and no issuance record is consulted.
pub fn authorize(presented: Option<&str>) -> Result<(), AuthError> {
    match presented {
        Some(token) if token.starts_with(TOKEN_PREFIX) => Ok(()),
        _ => Err(AuthError::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AdminAuth {
        AdminAuth::new(AdminCredentials {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        })
    }

    #[test]
    fn test_login_success_mints_prefixed_token() {
        let token = gate().login("admin", "admin123").unwrap();
        assert!(token.starts_with(TOKEN_PREFIX));
        // The suffix is a millisecond timestamp.
        let suffix = &token[TOKEN_PREFIX.len()..];
        assert!(suffix.parse::<i64>().is_ok());
    }

    #[test]
    fn test_login_rejects_wrong_pair() {
        let gate = gate();
        assert_eq!(
            gate.login("admin", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            gate.login("root", "admin123"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(gate.login("", ""), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_authorize_accepts_any_prefixed_value() {
        // Never issued, still accepted: the check is format-only.
        assert!(authorize(Some("simple-token-0")).is_ok());
        assert!(authorize(Some("simple-token-not-even-a-number")).is_ok());
    }

    #[test]
    fn test_authorize_rejects_missing_or_malformed() {
        assert_eq!(authorize(None), Err(AuthError::Unauthorized));
        assert_eq!(authorize(Some("")), Err(AuthError::Unauthorized));
        assert_eq!(
            authorize(Some("Bearer simple-token-123")),
            Err(AuthError::Unauthorized)
        );
        assert_eq!(authorize(Some("other-token-1")), Err(AuthError::Unauthorized));
    }

    #[test]
    fn test_issued_token_passes_authorize() {
        let token = gate().login("admin", "admin123").unwrap();
        assert!(authorize(Some(&token)).is_ok());
    }
}
