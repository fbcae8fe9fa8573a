//! In-memory implementation of the media library repository.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::media::{CreateMediaItem, MediaItem, UpdateMediaItem};
use ecclesia_core::repository::{PaginatedResult, Pagination, Repository};
use ecclesia_core::EcclesiaResult;

use crate::store::{MemoryStore, require_non_empty};

impl Repository<MediaItem> for MemoryStore {
    type Create = CreateMediaItem;
    type Update = UpdateMediaItem;

    async fn create(&self, tenant_id: Uuid, input: CreateMediaItem) -> EcclesiaResult<MediaItem> {
        self.inner.require_tenant(tenant_id)?;
        require_non_empty(&input.title, "title")?;
        require_non_empty(&input.url, "url")?;
        self.inner
            .require_user(tenant_id, input.uploader_id, "uploader_id")?;

        let now = Utc::now();
        Ok(self.inner.media.insert(MediaItem {
            id: Uuid::new_v4(),
            tenant_id,
            title: input.title,
            kind: input.kind,
            url: input.url,
            tags: input.tags,
            uploader_id: input.uploader_id,
            upload_date: input.upload_date,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<MediaItem> {
        self.inner.media.get(tenant_id, id)
    }

    async fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        input: UpdateMediaItem,
    ) -> EcclesiaResult<MediaItem> {
        if let Some(title) = &input.title {
            require_non_empty(title, "title")?;
        }
        if let Some(url) = &input.url {
            require_non_empty(url, "url")?;
        }

        self.inner.media.update_with(tenant_id, id, |item| {
            if let Some(title) = input.title {
                item.title = title;
            }
            if let Some(kind) = input.kind {
                item.kind = kind;
            }
            if let Some(url) = input.url {
                item.url = url;
            }
            if let Some(tags) = input.tags {
                item.tags = tags;
            }
            item.updated_at = Utc::now();
        })
    }

    async fn delete(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        self.inner.media.remove(tenant_id, id)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<MediaItem>> {
        Ok(self.inner.media.list(tenant_id, pagination))
    }
}
