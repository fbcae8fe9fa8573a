//! Media library domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
    Document,
    Image,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub title: String,
    pub kind: MediaKind,
    pub url: String,
    pub tags: Vec<String>,
    /// The user who uploaded the item.
    pub uploader_id: Uuid,
    pub upload_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMediaItem {
    pub title: String,
    pub kind: MediaKind,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub uploader_id: Uuid,
    pub upload_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateMediaItem {
    pub title: Option<String>,
    pub kind: Option<MediaKind>,
    pub url: Option<String>,
    pub tags: Option<Vec<String>>,
}
