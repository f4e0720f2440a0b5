//! Session records and the signed bearer token that refers to them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-side session, keyed by the token's `jti`
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// JWT claims carried by session tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub user_id: i32,
    /// Session id in the session store
    pub jti: String,
    pub exp: i64,
    pub iat: i64,
}

impl SessionClaims {
    pub fn for_session(session: &Session) -> Self {
        Self {
            sub: session.user_id.to_string(),
            user_id: session.user_id,
            jti: session.id.clone(),
            exp: session.expires_at.timestamp(),
            iat: session.created_at.timestamp(),
        }
    }

    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and verify a JWT token (signature and expiry)
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}
