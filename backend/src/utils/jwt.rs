//! JWT token utilities for authentication and authorization.
//!
//! Provides token creation and validation for user authentication. Claims
//! carry the caller's identity and role, nothing more.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::database::models::UserRole;
use crate::errors::{ServiceError, ServiceResult};

/// JWT Claims structure containing user authentication data
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// User role
    pub role: String,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

/// JWT token utility for creating and validating tokens
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in: u64,
}

impl JwtUtils {
    /// Create a new JwtUtils instance from the injected configuration.
    pub fn new(config: &Config) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            expires_in: config.jwt_expires_in_seconds,
        }
    }

    /// Generate a new access token for a user.
    pub fn generate_token(&self, user_id: String, role: String) -> ServiceResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expires_in as i64);

        let claims = Claims {
            sub: user_id,
            role,
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal(format!("Token generation failed: {}", e)))
    }

    /// Validate and decode an access token. Bad signatures and expired
    /// tokens are indistinguishable to the caller.
    pub fn validate_token(&self, token: &str) -> ServiceResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| ServiceError::unauthenticated("Invalid token"))
    }
}

impl Claims {
    pub fn user_id(&self) -> &str {
        &self.sub
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    /// Check if user has specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }

    /// Check if user is admin
    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Admin.as_str())
    }
}
