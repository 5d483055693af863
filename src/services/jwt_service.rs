use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::utils::errors::AppError;

/// Claims del token de sesión
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,  // email del usuario
    pub name: String, // nombre para mostrar
    pub exp: i64,
    pub iat: i64,
}

/// Servicio JWT: firma y verifica los tokens de sesión con el secreto de la cookie
#[derive(Clone)]
pub struct JwtService {
    algorithm: Algorithm,
    duration: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            duration: Duration::days(config.cookie_expiry_days),
            encoding_key: EncodingKey::from_secret(config.secret_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
        }
    }

    /// Duración de la sesión
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Genera un token de sesión
    pub fn generate_session_token(&self, email: &str, name: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: email.to_string(),
            name: name.to_string(),
            exp: (now + self.duration).timestamp(),
            iat: now.timestamp(),
        };

        Ok(encode(&Header::new(self.algorithm), &claims, &self.encoding_key)?)
    }

    /// Valida y decodifica un token (firma y expiración)
    pub fn validate_token(&self, token: &str) -> Result<SessionClaims, AppError> {
        let validation = Validation::new(self.algorithm);

        Ok(decode::<SessionClaims>(token, &self.decoding_key, &validation)?.claims)
    }
}
