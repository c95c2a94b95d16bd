pub mod auth;
pub mod catalog;
pub mod favorites;
pub mod social;

use actix_web::{web, HttpResponse};
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .service(
            web::scope("/api/auth")
                .route("/register", web::post().to(auth::register))
                .route("/login", web::post().to(auth::login))
                .route("/me", web::get().to(auth::me)),
        )
        .service(
            web::scope("/api/catalog")
                .route("", web::get().to(catalog::list))
                .route("", web::post().to(catalog::create))
                .route("/{id}", web::put().to(catalog::update))
                .route("/{id}", web::delete().to(catalog::delete)),
        )
        .service(
            web::scope("/api/favorites")
                .route("", web::get().to(favorites::list))
                .route("", web::post().to(favorites::add))
                .route("/{item_id}", web::get().to(favorites::contains))
                .route("/{item_id}", web::delete().to(favorites::remove)),
        )
        .service(
            web::scope("/api/social")
                .route("/lists", web::get().to(social::lists))
                .route("/lists", web::post().to(social::create_list))
                .route("/lists/{id}", web::delete().to(social::delete_list))
                .route("/lists/{id}/items", web::post().to(social::add_item))
                .route(
                    "/lists/{id}/items/{item_id}",
                    web::delete().to(social::remove_item),
                ),
        );
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "ok": true }))
}

fn not_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
