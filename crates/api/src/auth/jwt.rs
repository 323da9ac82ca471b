//! JWT access-token generation and validation.
//!
//! Access tokens are HS256-signed JWTs carrying a [`Claims`] payload. The
//! subject is the user id every lending and badge operation acts as.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shelfwise_core::types::DbId;
use uuid::Uuid;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in minutes (default: 60).
    pub access_token_expiry_mins: i64,
}

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                  | Required | Default |
    /// |--------------------------|----------|---------|
    /// | `JWT_SECRET`             | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS` | no       | `60`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            access_token_expiry_mins,
        }
    }
}

/// Generate an HS256 access token for the given user.
pub fn generate_access_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.access_token_expiry_mins * 60;

    let claims = Claims {
        sub: user_id,
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Signature and expiration are checked.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        }
    }

    #[test]
    fn test_generate_and_validate_access_token() {
        let config = test_config();
        let token = generate_access_token(42, &config).expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, 42);
        assert!(claims.exp > claims.iat);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            exp: now - 300,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn test_different_secrets_fail() {
        let signer = JwtConfig {
            secret: "secret-alpha".to_string(),
            access_token_expiry_mins: 15,
        };
        let verifier = JwtConfig {
            secret: "secret-bravo".to_string(),
            access_token_expiry_mins: 15,
        };

        let token = generate_access_token(1, &signer).expect("token generation should succeed");

        assert!(
            validate_token(&token, &verifier).is_err(),
            "token signed with a different secret must fail"
        );
    }
}
