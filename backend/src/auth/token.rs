//! Bearer token issuance and verification
//!
//! Tokens are self-contained signed JWTs; verification is a pure
//! signature check with no server-side session state, so any instance
//! can verify a token issued by any other instance sharing the secret.
//!
//! Keys are pre-computed once at startup and wrapped in `Arc` for cheap
//! cloning across request handlers.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Token claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,
    /// Account email
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp); absent when no expiry is
    /// configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Parse the subject claim as an account ID.
    pub fn account_id(&self) -> Result<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|_| anyhow::anyhow!("Invalid account ID in token"))
    }
}

/// Pre-computed signing keys
///
/// Key derivation is expensive, so these are created once and cached in
/// AppState.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl TokenKeys {
    fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// Token service for issue/verify operations
///
/// Call `new` once at application startup and store in AppState; do NOT
/// create per-request.
#[derive(Clone)]
pub struct TokenService {
    keys: TokenKeys,
    expiry_secs: Option<i64>,
    validation: Validation,
}

impl TokenService {
    /// Create a new token service with pre-computed keys.
    ///
    /// `expiry_secs: None` issues time-unbounded tokens; the verifier
    /// accepts them either way and enforces `exp` when present.
    pub fn new(secret: &str, expiry_secs: Option<i64>) -> Self {
        let mut validation = Validation::default();
        // Tokens without an expiry claim are accepted; an expired claim
        // still fails.
        validation.required_spec_claims.clear();

        Self {
            keys: TokenKeys::new(secret),
            expiry_secs,
            validation,
        }
    }

    /// Issue a signed token embedding the account identity.
    pub fn issue(&self, account_id: Uuid, email: &str) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: account_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: self
                .expiry_secs
                .map(|secs| (now + Duration::seconds(secs)).timestamp()),
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))
    }

    /// Verify a token and return its claims unchanged.
    ///
    /// Fails when the signature does not match, the structure is
    /// malformed, or an embedded expiry has passed.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.keys.decoding, &self.validation)
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }
}
