use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::icons::validate_icon;

/// A persisted knowledge entry: the raw input plus the model's improvements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct KnowledgeEntry {
    pub entry_id: i32,
    pub business_id: i32,
    pub title: String,
    pub content: String,
    pub content_type: String,
    pub improved_title: String,
    pub improved_content: String,
    #[schema(example = "LightBulbIcon")]
    pub icon: String,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl KnowledgeEntry {
    /// Text handed to the embedding provider for this entry.
    pub fn embedding_text(&self) -> String {
        embedding_text(&self.improved_title, &self.improved_content)
    }
}

/// Stable join of the improved fields that gets embedded.
pub fn embedding_text(improved_title: &str, improved_content: &str) -> String {
    format!("Title: {}\nContent: {}", improved_title, improved_content)
}

/// Entry without the generated fields, returned by updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct KnowledgeEntrySummary {
    pub entry_id: i32,
    pub business_id: i32,
    pub title: String,
    pub content: String,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<KnowledgeEntry> for KnowledgeEntrySummary {
    fn from(entry: KnowledgeEntry) -> Self {
        Self {
            entry_id: entry.entry_id,
            business_id: entry.business_id,
            title: entry.title,
            content: entry.content,
            content_type: entry.content_type,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

/// Raw entry as submitted by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateKnowledgeEntry {
    #[validate(range(min = 1))]
    pub business_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub content: String,
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "faq")]
    pub content_type: String,
}

/// DTO for patching the raw fields of an entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateKnowledgeEntry {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 1000))]
    pub content: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub content_type: Option<String>,
}

impl UpdateKnowledgeEntry {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.content_type.is_none()
    }
}

/// Fields produced by the enrichment model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnrichedFields {
    pub improved_title: String,
    pub improved_content: String,
    pub icon: String,
    pub categories: Vec<String>,
}

/// Raw and enriched fields together, ready for the relational store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewKnowledgeEntry {
    #[validate(range(min = 1))]
    pub business_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub content: String,
    #[validate(length(min = 1, max = 255))]
    pub content_type: String,
    #[validate(length(min = 1, max = 255))]
    pub improved_title: String,
    #[validate(length(min = 1))]
    pub improved_content: String,
    #[validate(custom(function = "validate_icon"))]
    pub icon: String,
    #[validate(length(min = 2, max = 5))]
    pub categories: Vec<String>,
}

impl NewKnowledgeEntry {
    pub fn new(raw: CreateKnowledgeEntry, enriched: EnrichedFields) -> Self {
        Self {
            business_id: raw.business_id,
            title: raw.title,
            content: raw.content,
            content_type: raw.content_type,
            improved_title: enriched.improved_title,
            improved_content: enriched.improved_content,
            icon: enriched.icon,
            categories: enriched.categories,
        }
    }
}

/// Outcome of rebuilding the vector store from the relational store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReindexReport {
    /// Entries found in the relational store
    pub total: usize,
    /// Entries whose vector was regenerated
    pub indexed: usize,
    /// Entries whose embedding failed; any previous vector was kept
    pub failed: Vec<i32>,
    /// Vectors dropped because their entry no longer exists
    pub removed: usize,
}

/// Query parameters for entry creation
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateEntryQuery {
    /// Generate and store the embedding after the entry is persisted
    #[serde(default = "default_index")]
    pub index: bool,
}

impl Default for CreateEntryQuery {
    fn default() -> Self {
        Self { index: true }
    }
}

fn default_index() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_entry(categories: usize, icon: &str) -> NewKnowledgeEntry {
        NewKnowledgeEntry {
            business_id: 1,
            title: "opening hours".into(),
            content: "we open 9 to 5".into(),
            content_type: "faq".into(),
            improved_title: "Opening Hours".into(),
            improved_content: "We are open **9:00 to 17:00**.".into(),
            icon: icon.into(),
            categories: (0..categories).map(|i| format!("🕒 Topic {}", i)).collect(),
        }
    }

    #[test]
    fn test_new_entry_category_bounds() {
        assert!(new_entry(1, "CalendarIcon").validate().is_err());
        assert!(new_entry(2, "CalendarIcon").validate().is_ok());
        assert!(new_entry(5, "CalendarIcon").validate().is_ok());
        assert!(new_entry(6, "CalendarIcon").validate().is_err());
    }

    #[test]
    fn test_new_entry_rejects_unknown_icon() {
        let errors = new_entry(3, "RocketIcon").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("icon"));
    }

    #[test]
    fn test_create_rejects_non_positive_business_id() {
        let input = CreateKnowledgeEntry {
            business_id: 0,
            title: "t".into(),
            content: "c".into(),
            content_type: "faq".into(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_update_validates_present_fields_only() {
        assert!(UpdateKnowledgeEntry::default().validate().is_ok());

        let blank_title = UpdateKnowledgeEntry {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(blank_title.validate().is_err());
    }

    #[test]
    fn test_embedding_text_layout() {
        assert_eq!(embedding_text("Hours", "9 to 5"), "Title: Hours\nContent: 9 to 5");
    }

    #[test]
    fn test_create_query_defaults_to_indexing() {
        let query: CreateEntryQuery = serde_json::from_str("{}").unwrap();
        assert!(query.index);
    }
}
