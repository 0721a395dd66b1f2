//! PgKnowledgeEntryRepository against a real Postgres (testcontainers).

use domain_knowledge::*;
use test_utils::{TestDataBuilder, TestDatabase};

fn new_entry(builder: &TestDataBuilder) -> NewKnowledgeEntry {
    NewKnowledgeEntry {
        business_id: builder.business_id(),
        title: builder.name("entry", "title"),
        content: "Pickup is available from 10:00".to_string(),
        content_type: "faq".to_string(),
        improved_title: "Store Pickup".to_string(),
        improved_content: "Pickup is available **from 10:00**.".to_string(),
        icon: "ShoppingCartIcon".to_string(),
        categories: vec!["🛒 Orders".to_string(), "🏪 Store".to_string()],
    }
}

#[tokio::test]
async fn test_create_and_get_round_trip_through_postgres() {
    let db = TestDatabase::new().await;
    let repo = PgKnowledgeEntryRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_create_get");

    let created = repo.create(new_entry(&builder)).await.unwrap();
    assert!(created.entry_id > 0);

    let fetched = repo.get_by_id(created.entry_id).await.unwrap().unwrap();
    assert_eq!(fetched.categories, vec!["🛒 Orders", "🏪 Store"]);
    assert_eq!(fetched.icon, "ShoppingCartIcon");
    assert_eq!(fetched.business_id, builder.business_id());
}

#[tokio::test]
async fn test_update_patches_raw_fields_only() {
    let db = TestDatabase::new().await;
    let repo = PgKnowledgeEntryRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_update");

    let created = repo.create(new_entry(&builder)).await.unwrap();
    let updated = repo
        .update(
            created.entry_id,
            UpdateKnowledgeEntry {
                content_type: Some("policy".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.content_type, "policy");
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.improved_content, created.improved_content);
    assert!(updated.updated_at >= created.updated_at);

    let missing = repo.update(i32::MAX, UpdateKnowledgeEntry::default()).await;
    assert!(matches!(missing, Err(KnowledgeError::NotFound(_))));
}

#[tokio::test]
async fn test_list_all_is_ordered_by_id() {
    let db = TestDatabase::new().await;
    let repo = PgKnowledgeEntryRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("pg_list");

    let first = repo.create(new_entry(&builder)).await.unwrap();
    let second = repo.create(new_entry(&builder)).await.unwrap();

    let ids: Vec<i32> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.entry_id)
        .collect();
    assert_eq!(ids, vec![first.entry_id, second.entry_id]);
}
