use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::not_blank;
use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::model::PublicUser;
use crate::AppState;

const BCRYPT_COST: u32 = 10;

#[derive(Deserialize, Debug)]
pub struct RegisterBody {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct LoginBody {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
struct TokenBody {
    token: String,
}

pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterBody>,
) -> ApiResult<HttpResponse> {
    let RegisterBody {
        name,
        email,
        password,
    } = body.into_inner();
    let (Some(name), Some(email), Some(password)) =
        (not_blank(name), not_blank(email), not_blank(password))
    else {
        return Err(ApiError::Validation(
            "name, email and password are required".to_owned(),
        ));
    };

    let hash = bcrypt::hash(&password, BCRYPT_COST)
        .map_err(|err| ApiError::Internal(format!("password hashing failed: {}", err)))?;
    let user = state.users.insert(&name, &email, hash)?;
    log::info!("registered user {}", user.id);
    Ok(HttpResponse::Created().json(user.public()))
}

pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginBody>,
) -> ApiResult<HttpResponse> {
    let LoginBody { email, password } = body.into_inner();
    let (Some(email), Some(password)) = (not_blank(email), not_blank(password)) else {
        return Err(ApiError::Validation(
            "email and password are required".to_owned(),
        ));
    };

    // Unknown email and wrong password answer alike.
    let user = state
        .users
        .find_by_email(&email)?
        .ok_or_else(invalid_credentials)?;
    let ok = bcrypt::verify(&password, &user.password_hash)
        .map_err(|err| ApiError::Internal(format!("password verification failed: {}", err)))?;
    if !ok {
        log::debug!("failed login for {}", user.id);
        return Err(invalid_credentials());
    }

    let token = state.tokens.sign(&user)?;
    Ok(HttpResponse::Ok().json(TokenBody { token }))
}

pub async fn me(user: AuthUser) -> HttpResponse {
    HttpResponse::Ok().json(PublicUser {
        id: user.id,
        name: user.name,
        email: user.email,
    })
}

fn invalid_credentials() -> ApiError {
    ApiError::Auth("invalid credentials".to_owned())
}
