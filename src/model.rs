use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Show,
    Movie,
    Episode,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub title: String,
    pub description: String,
    pub cover_url: String,
    pub video_url: String,
    pub show_id: Option<String>,
    pub season: Option<u32>,
    pub episode_number: Option<u32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewCatalogItem {
    #[serde(rename = "type")]
    pub kind: Option<ItemKind>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub video_url: Option<String>,
    pub show_id: Option<String>,
    pub season: Option<u32>,
    pub episode_number: Option<u32>,
}

impl NewCatalogItem {
    pub fn into_item(self) -> Result<CatalogItem, ApiError> {
        let (Some(kind), Some(title)) =
            (self.kind, self.title.filter(|t| !t.trim().is_empty()))
        else {
            return Err(ApiError::Validation(
                "title and type are required".to_owned(),
            ));
        };
        Ok(CatalogItem {
            id: Uuid::new_v4().to_string(),
            kind,
            title,
            description: self.description.unwrap_or_default(),
            cover_url: self.cover_url.unwrap_or_default(),
            video_url: self.video_url.unwrap_or_default(),
            show_id: self.show_id,
            season: self.season,
            episode_number: self.episode_number,
            created_at: Utc::now(),
        })
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPatch {
    #[serde(rename = "type")]
    pub kind: Option<ItemKind>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "some_or_null")]
    pub show_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "some_or_null")]
    pub season: Option<Option<u32>>,
    #[serde(default, deserialize_with = "some_or_null")]
    pub episode_number: Option<Option<u32>>,
}

// For nullable fields: an absent key keeps the stored value, an explicit
// null clears it.
fn some_or_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

impl CatalogPatch {
    pub fn apply(self, item: &mut CatalogItem) {
        if let Some(kind) = self.kind {
            item.kind = kind;
        }
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(cover_url) = self.cover_url {
            item.cover_url = cover_url;
        }
        if let Some(video_url) = self.video_url {
            item.video_url = video_url;
        }
        if let Some(show_id) = self.show_id {
            item.show_id = show_id;
        }
        if let Some(season) = self.season {
            item.season = season;
        }
        if let Some(episode_number) = self.episode_number {
            item.episode_number = episode_number;
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub user_id: String,
    pub item_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ListCreator {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserList {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_public: bool,
    pub creator: ListCreator,
    pub items: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewUserList {
    pub name: Option<String>,
    pub description: Option<String>,
    pub items: Option<Vec<String>>,
    pub is_public: Option<bool>,
}

impl NewUserList {
    pub fn into_list(self, creator: ListCreator) -> Result<UserList, ApiError> {
        let Some(name) = self.name.filter(|n| !n.trim().is_empty()) else {
            return Err(ApiError::Validation("name is required".to_owned()));
        };
        Ok(UserList {
            id: Uuid::new_v4().to_string(),
            name,
            description: self.description.unwrap_or_default(),
            is_public: self.is_public.unwrap_or(true),
            creator,
            items: self.items.unwrap_or_default(),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> CatalogItem {
        NewCatalogItem {
            kind: Some(ItemKind::Episode),
            title: Some("Pilot".to_owned()),
            description: None,
            cover_url: None,
            video_url: None,
            show_id: Some("s1".to_owned()),
            season: Some(1),
            episode_number: Some(1),
        }
        .into_item()
        .unwrap()
    }

    #[test]
    fn new_item_defaults_optional_fields() {
        let item = item();
        assert!(!item.id.is_empty());
        assert_eq!(item.description, "");
        assert_eq!(item.cover_url, "");
        assert_eq!(item.video_url, "");
    }

    #[test]
    fn new_item_requires_title_and_type() {
        let draft: NewCatalogItem = serde_json::from_str(r#"{"title":"Dark"}"#).unwrap();
        assert!(matches!(draft.into_item(), Err(ApiError::Validation(_))));
        let draft: NewCatalogItem = serde_json::from_str(r#"{"type":"show"}"#).unwrap();
        assert!(draft.into_item().is_err());
    }

    #[test]
    fn patch_distinguishes_null_from_absent() {
        let mut item = item();

        let patch: CatalogPatch =
            serde_json::from_str(r#"{"title":"Pilot (remastered)"}"#).unwrap();
        patch.apply(&mut item);
        assert_eq!(item.title, "Pilot (remastered)");
        assert_eq!(item.show_id.as_deref(), Some("s1"));

        let patch: CatalogPatch =
            serde_json::from_str(r#"{"showId":null,"season":null}"#).unwrap();
        patch.apply(&mut item);
        assert_eq!(item.show_id, None);
        assert_eq!(item.season, None);
        assert_eq!(item.episode_number, Some(1));
    }

    #[test]
    fn item_kind_wire_names() {
        let json = serde_json::to_string(&ItemKind::Episode).unwrap();
        assert_eq!(json, r#""episode""#);
        let kind: ItemKind = serde_json::from_str(r#""movie""#).unwrap();
        assert_eq!(kind, ItemKind::Movie);
    }
}
