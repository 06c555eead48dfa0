//! JWT token verification
//!
//! Tokens are issued by the platform identity service; this server
//! only validates signature, expiry, issuer and audience, then reads
//! the staff claims.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT verification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Shared HS256 secret (at least 32 bytes)
    pub secret: String,
    /// Expected token issuer
    pub issuer: String,
    /// Expected token audience
    pub audience: String,
}

impl JwtConfig {
    /// Load from environment
    ///
    /// In production a missing JWT_SECRET is fatal; in debug builds a
    /// placeholder is used so the server can start without setup.
    pub fn from_env() -> Self {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(s) if s.len() >= 32 => s,
            Ok(_) | Err(_) => {
                #[cfg(debug_assertions)]
                {
                    tracing::warn!("JWT_SECRET missing or too short, using development key");
                    "development-only-secret-must-be-replaced".to_string()
                }
                #[cfg(not(debug_assertions))]
                {
                    panic!("FATAL: JWT_SECRET must be set to at least 32 bytes");
                }
            }
        };

        Self {
            secret,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "comanda-identity".to_string()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "comanda-staff".to_string()),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Claims carried in a staff token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject)
    pub sub: String,
    pub username: String,
    /// Role name, see [`crate::auth::Role`]
    pub role: String,
    /// Tenant scoping for every query this user issues
    pub tenant_id: String,
    /// Expiry timestamp (seconds)
    pub exp: i64,
    /// Issued-at timestamp (seconds)
    pub iat: i64,
    pub iss: String,
    pub aud: String,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,
}

/// Token verification service
#[derive(Debug, Clone)]
pub struct JwtService {
    config: JwtConfig,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Strip the `Bearer ` prefix from an Authorization header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }

    /// Validate a token and return its claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
            _ => JwtError::InvalidToken(e.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "0123456789abcdef0123456789abcdef".to_string(),
            issuer: "comanda-identity".to_string(),
            audience: "comanda-staff".to_string(),
        }
    }

    fn sign(claims: &Claims, config: &JwtConfig) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap()
    }

    fn valid_claims() -> Claims {
        let now = chrono::Utc::now().timestamp();
        Claims {
            sub: "u-1".to_string(),
            username: "ana".to_string(),
            role: "manager".to_string(),
            tenant_id: "t-1".to_string(),
            exp: now + 3600,
            iat: now,
            iss: "comanda-identity".to_string(),
            aud: "comanda-staff".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_good_token() {
        let config = test_config();
        let service = JwtService::new(config.clone());
        let token = sign(&valid_claims(), &config);

        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.username, "ana");
        assert_eq!(claims.tenant_id, "t-1");
    }

    #[test]
    fn test_validate_rejects_expired_token() {
        let config = test_config();
        let service = JwtService::new(config.clone());
        let mut claims = valid_claims();
        claims.exp = chrono::Utc::now().timestamp() - 3600;
        let token = sign(&claims, &config);

        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::ExpiredToken)
        ));
    }

    #[test]
    fn test_validate_rejects_wrong_audience() {
        let config = test_config();
        let service = JwtService::new(config.clone());
        let mut claims = valid_claims();
        claims.aud = "someone-else".to_string();
        let token = sign(&claims, &config);

        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
    }
}
