use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::not_blank;
use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::model::{ListCreator, NewUserList};
use crate::AppState;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    item_id: Option<String>,
}

pub async fn lists(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let lists = state.lists.public_lists()?;
    Ok(HttpResponse::Ok().json(lists))
}

pub async fn create_list(
    user: AuthUser,
    state: web::Data<AppState>,
    body: web::Json<NewUserList>,
) -> ApiResult<HttpResponse> {
    let creator = ListCreator {
        id: user.id,
        name: user.name,
    };
    let list = state.lists.insert(body.into_inner().into_list(creator)?)?;
    log::debug!("list {} created by {}", list.id, list.creator.id);
    Ok(HttpResponse::Created().json(list))
}

pub async fn add_item(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ItemBody>,
) -> ApiResult<HttpResponse> {
    let Some(item_id) = not_blank(body.into_inner().item_id) else {
        return Err(ApiError::Validation("itemId is required".to_owned()));
    };
    let list = state.lists.add_item(&path.into_inner(), &user.id, &item_id)?;
    Ok(HttpResponse::Ok().json(list))
}

pub async fn remove_item(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (list_id, item_id) = path.into_inner();
    let list = state.lists.remove_item(&list_id, &user.id, &item_id)?;
    Ok(HttpResponse::Ok().json(list))
}

pub async fn delete_list(
    user: AuthUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.lists.remove(&path.into_inner(), &user.id)?;
    Ok(HttpResponse::NoContent().finish())
}
