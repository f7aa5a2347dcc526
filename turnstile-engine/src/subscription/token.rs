//! Entitlement token parsing and validation.
//! Billing issues JWT-shaped tokens; the payload is decoded and its
//! claims validated here. Signature verification stays with the billing
//! service.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use turnstile_core::errors::{error_code, ErrorCode};

/// Claims carried by a billing-issued entitlement token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementClaims {
    /// Employer account identifier.
    #[serde(default)]
    pub sub: String,
    /// Subscription tier: "free", "standard", "premium", "enterprise".
    #[serde(default)]
    pub tier: String,
    /// Add-on module names enabled for the account.
    #[serde(default)]
    pub addons: Vec<String>,
    /// Issued at (Unix seconds).
    #[serde(default)]
    pub iat: u64,
    /// Expiration (Unix seconds). 0 = never expires.
    #[serde(default)]
    pub exp: u64,
    /// Licensed seat count (optional).
    #[serde(default)]
    pub seats: Option<u32>,
}

/// Token parsing and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Invalid token format: expected 3 dot-separated parts")]
    InvalidFormat,

    #[error("Base64 decode failed: {0}")]
    Base64(String),

    #[error("JSON parse failed: {0}")]
    Json(String),

    #[error("Token expired at {expired_at}, current time {now}")]
    Expired { expired_at: u64, now: u64 },

    #[error("Token not yet valid (issued in the future)")]
    NotYetValid,

    #[error("Cannot read token file {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("No token path configured")]
    NoTokenPath,
}

impl ErrorCode for TokenError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Expired { .. } => error_code::TOKEN_EXPIRED,
            _ => error_code::TOKEN_ERROR,
        }
    }
}

/// Clock skew tolerance for issued-at checks, in seconds.
const IAT_SKEW_SECS: u64 = 60;

/// Parse an entitlement token and extract its claims.
/// Validates structure and decodes the payload; expiry is checked
/// separately by [`validate_claims`].
pub fn parse_token(token: &str) -> Result<EntitlementClaims, TokenError> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::InvalidFormat);
    }

    // Decode the payload (second part). Padding is stripped first; JWT
    // base64url is unpadded but some issuers pad anyway.
    let payload = URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| TokenError::Base64(e.to_string()))?;
    let payload = String::from_utf8(payload).map_err(|e| TokenError::Json(e.to_string()))?;

    serde_json::from_str(&payload).map_err(|e| TokenError::Json(e.to_string()))
}

/// Validate claim timestamps (expiry, issued-at).
pub fn validate_claims(claims: &EntitlementClaims) -> Result<(), TokenError> {
    let now = current_unix_time();

    // exp = 0 means never expires.
    if claims.exp > 0 && claims.exp < now {
        return Err(TokenError::Expired {
            expired_at: claims.exp,
            now,
        });
    }

    if claims.iat > now + IAT_SKEW_SECS {
        return Err(TokenError::NotYetValid);
    }

    Ok(())
}

/// Expired, but still within the grace window.
pub fn is_in_grace_period(claims: &EntitlementClaims, grace_days: u64) -> bool {
    if claims.exp == 0 {
        return false;
    }
    let now = current_unix_time();
    let grace_seconds = grace_days * 86_400;
    claims.exp < now && now < claims.exp + grace_seconds
}

/// Seconds until expiry; `u64::MAX` for non-expiring tokens, 0 if already
/// expired.
pub fn seconds_until_expiry(claims: &EntitlementClaims) -> u64 {
    if claims.exp == 0 {
        return u64::MAX;
    }
    claims.exp.saturating_sub(current_unix_time())
}

/// Build an unsigned token from claims, for tests and local tooling.
pub fn encode_token(claims: &EntitlementClaims) -> String {
    let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"none\",\"typ\":\"JWT\"}");
    let payload_json = serde_json::to_string(claims).unwrap_or_default();
    let payload = URL_SAFE_NO_PAD.encode(payload_json.as_bytes());
    format!("{header}.{payload}.unsigned")
}

pub(crate) fn current_unix_time() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_token() {
        let claims = EntitlementClaims {
            sub: "acme-corp".to_string(),
            tier: "premium".to_string(),
            addons: vec!["compliance".to_string()],
            iat: current_unix_time(),
            exp: current_unix_time() + 86_400,
            seats: Some(250),
        };

        let token = encode_token(&claims);
        let parsed = parse_token(&token).unwrap();
        assert_eq!(parsed.sub, "acme-corp");
        assert_eq!(parsed.tier, "premium");
        assert_eq!(parsed.addons, vec!["compliance"]);
        assert_eq!(parsed.seats, Some(250));
    }

    #[test]
    fn expired_token_detected() {
        let claims = EntitlementClaims {
            sub: "acme-corp".to_string(),
            tier: "standard".to_string(),
            addons: vec![],
            iat: 1_000_000,
            exp: 1_000_001,
            seats: None,
        };

        let parsed = parse_token(&encode_token(&claims)).unwrap();
        assert!(matches!(
            validate_claims(&parsed),
            Err(TokenError::Expired { .. })
        ));
    }

    #[test]
    fn grace_period_window() {
        let now = current_unix_time();
        let claims = EntitlementClaims {
            sub: "acme-corp".to_string(),
            tier: "standard".to_string(),
            addons: vec![],
            iat: now - 86_400,
            exp: now - 3_600,
            seats: None,
        };

        assert!(is_in_grace_period(&claims, 7));
        assert!(!is_in_grace_period(&claims, 0));
    }

    #[test]
    fn malformed_token_format() {
        assert!(parse_token("just-one-part").is_err());
        assert!(parse_token("two.parts").is_err());
        assert!(parse_token("").is_err());
        assert!(parse_token("a.!!!not-base64!!!.c").is_err());
    }

    #[test]
    fn non_expiring_token() {
        let claims = EntitlementClaims {
            sub: "forever".to_string(),
            tier: "enterprise".to_string(),
            addons: vec![],
            iat: current_unix_time(),
            exp: 0,
            seats: None,
        };

        assert!(validate_claims(&claims).is_ok());
        assert_eq!(seconds_until_expiry(&claims), u64::MAX);
        assert!(!is_in_grace_period(&claims, 7));
    }
}
