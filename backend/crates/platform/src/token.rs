//! Signed Identity Tokens
//!
//! Stateless bearer tokens (JWT, HS256) binding a user identifier and
//! username to a fixed issuer claim. Verification is purely cryptographic;
//! there is no server-side session state and no revocation list.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lifetime in seconds (24 hours)
pub const TOKEN_TTL_SECS: u64 = 24 * 3600;

/// Clock skew tolerance for verification (60 seconds)
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Claims carried by an identity token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub id: i32,
    /// Username at issue time
    pub username: String,
    /// Issuer
    pub iss: String,
    /// Issued-at timestamp (Unix seconds)
    pub iat: u64,
    /// Expiration timestamp (Unix seconds)
    pub exp: u64,
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing failed (treated as a server error by callers)
    #[error("Token signing failed: {0}")]
    Signing(String),

    /// Tampered, malformed, expired, or wrong-signature token.
    /// All verification failures collapse into this variant so callers
    /// cannot distinguish why a presented token was rejected.
    #[error("Invalid token")]
    Invalid,
}

/// Issues and verifies identity tokens with a process-wide shared secret
///
/// Constructed once at startup and injected into handlers; the secret is
/// never rotated at runtime.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
}

impl TokenService {
    /// Create a service from the shared secret and issuer claim
    pub fn new(secret: &[u8], issuer: impl Into<String>) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            issuer: issuer.into(),
        }
    }

    /// Issue a signed token for the given user
    pub fn issue(&self, user_id: i32, username: &str) -> Result<String, TokenError> {
        let iat = unix_now();

        let claims = Claims {
            id: user_id,
            username: username.to_string(),
            iss: self.issuer.clone(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token and return its claims
    ///
    /// Checks the signature against the shared secret, the issuer claim,
    /// and the expiration (with clock skew leeway).
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = CLOCK_SKEW_LEEWAY;
        validation.set_issuer(&[&self.issuer]);
        validation.validate_aud = false;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
