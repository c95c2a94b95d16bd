use actix_web::{http::StatusCode, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::not_blank;
use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteBody {
    item_id: Option<String>,
}

#[derive(Serialize)]
struct FavoritesBody {
    favorites: Vec<String>,
}

pub async fn list(user: AuthUser, state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let favorites = state.favorites.ids_for_user(&user.id)?;
    Ok(HttpResponse::Ok().json(FavoritesBody { favorites }))
}

pub async fn contains(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let item_id = path.into_inner();
    let favorited = state.favorites.contains(&user.id, &item_id)?;
    Ok(HttpResponse::Ok().json(json!({ "itemId": item_id, "favorited": favorited })))
}

pub async fn add(
    user: AuthUser,
    state: web::Data<AppState>,
    body: web::Json<FavoriteBody>,
) -> ApiResult<HttpResponse> {
    let Some(item_id) = not_blank(body.into_inner().item_id) else {
        return Err(ApiError::Validation("itemId is required".to_owned()));
    };
    let created = state.favorites.add(&user.id, &item_id)?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok(HttpResponse::build(status).json(json!({ "itemId": item_id, "favorited": true })))
}

pub async fn remove(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.favorites.remove(&user.id, &path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
