use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::KnowledgeError;
use crate::models::{KnowledgeEntry, NewKnowledgeEntry};

/// Sea-ORM Entity for the knowledge_entries table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "knowledge_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub entry_id: i32,
    pub business_id: i32,
    pub title: String,
    pub content: String,
    pub content_type: String,
    pub improved_title: String,
    #[sea_orm(column_type = "Text")]
    pub improved_content: String,
    pub icon: String,
    pub categories: Json, // JSONB array of strings
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Mount point of the entries router under `/api`
    pub const URL: &'static str = "/knowledge-entries";
    pub const TAG: &'static str = "Knowledge Entries";
}

/// Fails when the `categories` column does not hold an array of strings.
impl TryFrom<Model> for KnowledgeEntry {
    type Error = KnowledgeError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let categories: Vec<String> =
            serde_json::from_value(model.categories).map_err(|e| {
                tracing::warn!(entry_id = model.entry_id, error = %e, "Stored categories are malformed");
                KnowledgeError::Persistence(format!(
                    "Entry {} has malformed categories: {}",
                    model.entry_id, e
                ))
            })?;

        Ok(Self {
            entry_id: model.entry_id,
            business_id: model.business_id,
            title: model.title,
            content: model.content,
            content_type: model.content_type,
            improved_title: model.improved_title,
            improved_content: model.improved_content,
            icon: model.icon,
            categories,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

impl From<NewKnowledgeEntry> for ActiveModel {
    fn from(input: NewKnowledgeEntry) -> Self {
        let now = chrono::Utc::now();

        ActiveModel {
            entry_id: NotSet,
            business_id: Set(input.business_id),
            title: Set(input.title),
            content: Set(input.content),
            content_type: Set(input.content_type),
            improved_title: Set(input.improved_title),
            improved_content: Set(input.improved_content),
            icon: Set(input.icon),
            categories: Set(Json::from(input.categories)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
