use actix_web::{web, HttpResponse};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::model::{CatalogPatch, NewCatalogItem};
use crate::AppState;

pub async fn list(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let items = state.catalog.list()?;
    Ok(HttpResponse::Ok().json(items))
}

pub async fn create(
    user: AuthUser,
    state: web::Data<AppState>,
    body: web::Json<NewCatalogItem>,
) -> ApiResult<HttpResponse> {
    let item = state.catalog.insert(body.into_inner().into_item()?)?;
    log::debug!("catalog item {} created by {}", item.id, user.id);
    Ok(HttpResponse::Created().json(item))
}

pub async fn update(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<CatalogPatch>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let item = state.catalog.update(&id, body.into_inner())?;
    log::debug!("catalog item {} updated by {}", id, user.id);
    Ok(HttpResponse::Ok().json(item))
}

pub async fn delete(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    state.catalog.remove(&id)?;
    log::debug!("catalog item {} deleted by {}", id, user.id);
    Ok(HttpResponse::NoContent().finish())
}
