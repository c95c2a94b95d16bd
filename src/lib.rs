pub mod auth;
pub mod config;
pub mod error;
pub mod model;
pub mod repo;
pub mod routes;
pub mod store;

use std::path::Path;

use crate::auth::TokenKeys;
use crate::config::Config;
use crate::repo::{CatalogRepo, FavoriteRepo, ListRepo, UserRepo};
use crate::store::JsonFileStore;

pub struct AppState {
    pub users: UserRepo,
    pub catalog: CatalogRepo,
    pub favorites: FavoriteRepo,
    pub lists: ListRepo,
    pub tokens: TokenKeys,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_data_dir(&config.data_dir, &config.jwt_secret)
    }

    pub fn with_data_dir(dir: &Path, jwt_secret: &str) -> Self {
        AppState {
            users: UserRepo::new(Box::new(JsonFileStore::new(dir.join("users.json")))),
            catalog: CatalogRepo::new(Box::new(JsonFileStore::new(dir.join("shows.json")))),
            favorites: FavoriteRepo::new(Box::new(JsonFileStore::new(dir.join("favorites.json")))),
            lists: ListRepo::new(Box::new(JsonFileStore::new(dir.join("lists.json")))),
            tokens: TokenKeys::new(jwt_secret),
        }
    }
}
