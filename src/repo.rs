use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::model::{CatalogItem, CatalogPatch, Favorite, User, UserList};
use crate::store::Store;

// Each repository serializes its read-modify-write cycle; without the
// guard two in-process writers could overwrite each other's update at
// whole-array granularity.

pub struct UserRepo {
    store: Box<dyn Store<User>>,
    write: Mutex<()>,
}

impl UserRepo {
    pub fn new(store: Box<dyn Store<User>>) -> Self {
        UserRepo {
            store,
            write: Mutex::new(()),
        }
    }

    pub fn find_by_email(&self, email: &str) -> ApiResult<Option<User>> {
        let users = self.store.load()?;
        Ok(users
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email)))
    }

    pub fn insert(&self, name: &str, email: &str, password_hash: String) -> ApiResult<User> {
        let _guard = self.write.lock().unwrap();
        let mut users = self.store.load()?;
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
            return Err(ApiError::Conflict("email is already registered".to_owned()));
        }
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            email: email.to_owned(),
            password_hash,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        self.store.save(&users)?;
        Ok(user)
    }
}

pub struct CatalogRepo {
    store: Box<dyn Store<CatalogItem>>,
    write: Mutex<()>,
}

impl CatalogRepo {
    pub fn new(store: Box<dyn Store<CatalogItem>>) -> Self {
        CatalogRepo {
            store,
            write: Mutex::new(()),
        }
    }

    pub fn list(&self) -> ApiResult<Vec<CatalogItem>> {
        self.store.load()
    }

    pub fn insert(&self, item: CatalogItem) -> ApiResult<CatalogItem> {
        let _guard = self.write.lock().unwrap();
        let mut items = self.store.load()?;
        items.push(item.clone());
        self.store.save(&items)?;
        Ok(item)
    }

    pub fn update(&self, id: &str, patch: CatalogPatch) -> ApiResult<CatalogItem> {
        let _guard = self.write.lock().unwrap();
        let mut items = self.store.load()?;
        let Some(item) = items.iter_mut().find(|i| i.id == id) else {
            return Err(ApiError::NotFound("item not found".to_owned()));
        };
        patch.apply(item);
        let updated = item.clone();
        self.store.save(&items)?;
        Ok(updated)
    }

    pub fn remove(&self, id: &str) -> ApiResult<()> {
        let _guard = self.write.lock().unwrap();
        let mut items = self.store.load()?;
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(ApiError::NotFound("item not found".to_owned()));
        }
        self.store.save(&items)
    }
}

pub struct FavoriteRepo {
    store: Box<dyn Store<Favorite>>,
    write: Mutex<()>,
}

impl FavoriteRepo {
    pub fn new(store: Box<dyn Store<Favorite>>) -> Self {
        FavoriteRepo {
            store,
            write: Mutex::new(()),
        }
    }

    pub fn ids_for_user(&self, user_id: &str) -> ApiResult<Vec<String>> {
        let favorites = self.store.load()?;
        Ok(favorites
            .into_iter()
            .filter(|f| f.user_id == user_id)
            .map(|f| f.item_id)
            .collect())
    }

    pub fn contains(&self, user_id: &str, item_id: &str) -> ApiResult<bool> {
        let favorites = self.store.load()?;
        Ok(favorites
            .iter()
            .any(|f| f.user_id == user_id && f.item_id == item_id))
    }

    /// Returns true when the pair was newly stored; adding an existing
    /// favorite is a no-op.
    pub fn add(&self, user_id: &str, item_id: &str) -> ApiResult<bool> {
        let _guard = self.write.lock().unwrap();
        let mut favorites = self.store.load()?;
        if favorites
            .iter()
            .any(|f| f.user_id == user_id && f.item_id == item_id)
        {
            return Ok(false);
        }
        favorites.push(Favorite {
            user_id: user_id.to_owned(),
            item_id: item_id.to_owned(),
            created_at: Utc::now(),
        });
        self.store.save(&favorites)?;
        Ok(true)
    }

    pub fn remove(&self, user_id: &str, item_id: &str) -> ApiResult<()> {
        let _guard = self.write.lock().unwrap();
        let mut favorites = self.store.load()?;
        let before = favorites.len();
        favorites.retain(|f| !(f.user_id == user_id && f.item_id == item_id));
        if favorites.len() == before {
            return Err(ApiError::NotFound("item is not favorited".to_owned()));
        }
        self.store.save(&favorites)
    }
}

pub struct ListRepo {
    store: Box<dyn Store<UserList>>,
    write: Mutex<()>,
}

impl ListRepo {
    pub fn new(store: Box<dyn Store<UserList>>) -> Self {
        ListRepo {
            store,
            write: Mutex::new(()),
        }
    }

    pub fn public_lists(&self) -> ApiResult<Vec<UserList>> {
        let lists = self.store.load()?;
        Ok(lists.into_iter().filter(|l| l.is_public).collect())
    }

    pub fn insert(&self, list: UserList) -> ApiResult<UserList> {
        let _guard = self.write.lock().unwrap();
        let mut lists = self.store.load()?;
        lists.push(list.clone());
        self.store.save(&lists)?;
        Ok(list)
    }

    // Lists owned by someone else are reported as missing rather than
    // forbidden, so foreign list ids are not confirmed.
    pub fn add_item(&self, list_id: &str, actor_id: &str, item_id: &str) -> ApiResult<UserList> {
        let _guard = self.write.lock().unwrap();
        let mut lists = self.store.load()?;
        let Some(list) = lists
            .iter_mut()
            .find(|l| l.id == list_id && l.creator.id == actor_id)
        else {
            return Err(ApiError::NotFound("list not found".to_owned()));
        };
        if list.items.iter().any(|i| i == item_id) {
            return Err(ApiError::Conflict("item is already in the list".to_owned()));
        }
        list.items.push(item_id.to_owned());
        let updated = list.clone();
        self.store.save(&lists)?;
        Ok(updated)
    }

    pub fn remove_item(&self, list_id: &str, actor_id: &str, item_id: &str) -> ApiResult<UserList> {
        let _guard = self.write.lock().unwrap();
        let mut lists = self.store.load()?;
        let Some(list) = lists
            .iter_mut()
            .find(|l| l.id == list_id && l.creator.id == actor_id)
        else {
            return Err(ApiError::NotFound("list not found".to_owned()));
        };
        let before = list.items.len();
        list.items.retain(|i| i != item_id);
        if list.items.len() == before {
            return Err(ApiError::NotFound("item is not in the list".to_owned()));
        }
        let updated = list.clone();
        self.store.save(&lists)?;
        Ok(updated)
    }

    pub fn remove(&self, list_id: &str, actor_id: &str) -> ApiResult<()> {
        let _guard = self.write.lock().unwrap();
        let mut lists = self.store.load()?;
        let before = lists.len();
        lists.retain(|l| !(l.id == list_id && l.creator.id == actor_id));
        if lists.len() == before {
            return Err(ApiError::NotFound("list not found".to_owned()));
        }
        self.store.save(&lists)
    }
}
