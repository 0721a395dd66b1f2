use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{KnowledgeError, KnowledgeResult},
    models::{KnowledgeEntry, NewKnowledgeEntry, UpdateKnowledgeEntry},
    repository::KnowledgeEntryRepository,
};

pub struct PgKnowledgeEntryRepository {
    db: DatabaseConnection,
}

impl PgKnowledgeEntryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl KnowledgeEntryRepository for PgKnowledgeEntryRepository {
    async fn create(&self, input: NewKnowledgeEntry) -> KnowledgeResult<KnowledgeEntry> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(entry_id = model.entry_id, business_id = model.business_id, "Created knowledge entry");
        model.try_into()
    }

    async fn get_by_id(&self, entry_id: i32) -> KnowledgeResult<Option<KnowledgeEntry>> {
        let model = entity::Entity::find_by_id(entry_id).one(&self.db).await?;
        model.map(KnowledgeEntry::try_from).transpose()
    }

    async fn update(
        &self,
        entry_id: i32,
        input: UpdateKnowledgeEntry,
    ) -> KnowledgeResult<KnowledgeEntry> {
        let model = entity::Entity::find_by_id(entry_id)
            .one(&self.db)
            .await?
            .ok_or(KnowledgeError::NotFound(entry_id))?;

        let mut active_model: entity::ActiveModel = model.into();

        if let Some(title) = input.title {
            active_model.title = Set(title);
        }
        if let Some(content) = input.content {
            active_model.content = Set(content);
        }
        if let Some(content_type) = input.content_type {
            active_model.content_type = Set(content_type);
        }
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = active_model.update(&self.db).await?;

        tracing::info!(entry_id, "Updated knowledge entry");
        updated.try_into()
    }

    async fn list_all(&self) -> KnowledgeResult<Vec<KnowledgeEntry>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::EntryId)
            .all(&self.db)
            .await?;

        models.into_iter().map(KnowledgeEntry::try_from).collect()
    }
}
