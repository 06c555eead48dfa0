//! Authentication and authorization
//!
//! Staff identity is issued by the platform's identity service; this
//! server only verifies the JWT and enforces role gates. There is no
//! credential storage here.

pub mod extractor;
pub mod jwt;
pub mod roles;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use roles::Role;

use serde::{Deserialize, Serialize};

/// Authenticated staff member extracted from a verified token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user_id: String,
    pub username: String,
    pub role: Role,
    pub tenant_id: String,
}

impl TryFrom<Claims> for CurrentUser {
    type Error = String;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let role = claims
            .role
            .parse::<Role>()
            .map_err(|_| format!("Unknown role: {}", claims.role))?;
        if claims.tenant_id.is_empty() {
            return Err("Missing tenant_id claim".to_string());
        }
        Ok(Self {
            user_id: claims.sub,
            username: claims.username,
            role,
            tenant_id: claims.tenant_id,
        })
    }
}
