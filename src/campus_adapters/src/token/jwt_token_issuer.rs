use std::time::Duration;

use campus_core::{BearerToken, Email, TokenError, TokenIssuer};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: Secret<String>,
    pub lifetime: Duration,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 bearer tokens binding an email to an issue time and an expiry.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: chrono::Duration,
}

impl JwtTokenIssuer {
    pub fn new(config: &JwtConfig) -> Result<Self, TokenError> {
        let secret = config.secret.expose_secret().as_bytes();
        if secret.is_empty() {
            return Err(TokenError::Unexpected(
                "JWT signing secret is empty".to_owned(),
            ));
        }

        let lifetime = chrono::Duration::from_std(config.lifetime)
            .map_err(|_| TokenError::Unexpected("Token lifetime out of range".to_owned()))?;

        // Expiry is checked by `is_expired` so the boundary is exact and
        // signature checks still work on expired tokens.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["sub", "exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            lifetime,
        })
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected bearer token");
                TokenError::InvalidToken
            })
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, subject: &Email) -> Result<BearerToken, TokenError> {
        let issued_at = Utc::now();
        let expires_at = issued_at
            .checked_add_signed(self.lifetime)
            .ok_or(TokenError::Unexpected("Duration out of range".to_owned()))?;

        let claims = Claims {
            sub: subject.as_str().to_owned(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map(BearerToken::new)
            .map_err(|e| TokenError::Unexpected(e.to_string()))
    }

    fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        self.decode_claims(token).map(|claims| claims.sub)
    }

    fn is_expired(&self, token: &str) -> Result<bool, TokenError> {
        self.decode_claims(token)
            .map(|claims| Utc::now().timestamp() >= claims.exp)
    }

    fn validate(&self, token: &str, expected_subject: &str) -> bool {
        self.decode_claims(token).is_ok_and(|claims| {
            claims.sub == expected_subject && Utc::now().timestamp() < claims.exp
        })
    }
}
