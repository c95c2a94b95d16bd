use std::future::{ready, Ready};

use actix_web::http::header::AUTHORIZATION;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::model::User;
use crate::AppState;

pub const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        TokenKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn sign(&self, user: &User) -> Result<String, ApiError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|err| ApiError::Internal(format!("could not issue token: {}", err)))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| ApiError::Auth("invalid token".to_owned()))
    }
}

/// Identity decoded from the `Authorization: Bearer` header. Handlers
/// that take this extractor reject unauthenticated requests with 401
/// before the body is looked at.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthUser, ApiError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| ApiError::Internal("application state is not configured".to_owned()))?;
    let token = bearer_token(req).ok_or_else(|| ApiError::Auth("missing token".to_owned()))?;
    let claims = state.tokens.verify(token)?;
    Ok(AuthUser {
        id: claims.sub,
        email: claims.email,
        name: claims.name,
    })
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::new("test-secret")
    }

    fn user() -> User {
        User {
            id: "u1".to_owned(),
            name: "Ana".to_owned(),
            email: "a@x.com".to_owned(),
            password_hash: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn round_trip() {
        let keys = keys();
        let token = keys.sign(&user()).unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.name, "Ana");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_DAYS * 24 * 60 * 60);
    }

    #[test]
    fn rejects_other_secret() {
        let token = keys().sign(&user()).unwrap();
        assert!(TokenKeys::new("other-secret").verify(&token).is_err());
    }

    #[test]
    fn rejects_expired() {
        let keys = keys();
        let now = Utc::now();
        let claims = Claims {
            sub: "u1".to_owned(),
            email: "a@x.com".to_owned(),
            name: "Ana".to_owned(),
            iat: (now - Duration::days(8)).timestamp(),
            exp: (now - Duration::days(1)).timestamp(),
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).unwrap();
        assert!(matches!(keys.verify(&token), Err(ApiError::Auth(_))));
    }

    #[test]
    fn rejects_garbage() {
        assert!(keys().verify("not.a.token").is_err());
    }
}
