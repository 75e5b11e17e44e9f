//! JWT access token issuance and validation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (the user's email)
    pub sub: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl AccessClaims {
    /// Create claims for a subject with the given lifetime
    pub fn new(subject: impl Into<String>, ttl_minutes: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::minutes(ttl_minutes as i64);

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Configuration for token issuance
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token lifetime in minutes
    pub token_ttl_minutes: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, token_ttl_minutes: u64) -> Self {
        Self {
            secret: secret.into(),
            token_ttl_minutes,
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            token_ttl_minutes: 30,
        }
    }
}

/// Trait for access token operations
pub trait TokenIssuer: Send + Sync + Debug {
    /// Issue a signed token for a subject
    fn issue(&self, subject: &str) -> Result<String, DomainError>;

    /// Validate a token's signature and expiry, returning its claims
    fn decode(&self, token: &str) -> Result<AccessClaims, DomainError>;

    /// Token lifetime in minutes
    fn token_ttl_minutes(&self) -> u64;
}

/// HS256 token service with a process-wide secret, built once at startup
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_ttl_minutes", &self.config.token_ttl_minutes)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenIssuer for JwtService {
    fn issue(&self, subject: &str) -> Result<String, DomainError> {
        let claims = AccessClaims::new(subject, self.config.token_ttl_minutes);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to issue token: {}", e)))
    }

    fn decode(&self, token: &str) -> Result<AccessClaims, DomainError> {
        let validation = Validation::default();

        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| DomainError::credential(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }

    fn token_ttl_minutes(&self) -> u64 {
        self.config.token_ttl_minutes
    }
}
