use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KnowledgeEntries::Table)
                    .if_not_exists()
                    .col(pk_auto(KnowledgeEntries::EntryId))
                    .col(integer(KnowledgeEntries::BusinessId))
                    .col(string_len(KnowledgeEntries::Title, 255))
                    .col(string_len(KnowledgeEntries::Content, 1000))
                    .col(string_len(KnowledgeEntries::ContentType, 255))
                    .col(string_len(KnowledgeEntries::ImprovedTitle, 255))
                    .col(text(KnowledgeEntries::ImprovedContent))
                    .col(string_len(KnowledgeEntries::Icon, 255))
                    .col(json_binary(KnowledgeEntries::Categories).default("[]"))
                    .col(
                        timestamp_with_time_zone(KnowledgeEntries::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(KnowledgeEntries::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Every read path is scoped to one business
        manager
            .create_index(
                Index::create()
                    .name("idx_knowledge_entries_business_id")
                    .table(KnowledgeEntries::Table)
                    .col(KnowledgeEntries::BusinessId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KnowledgeEntries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum KnowledgeEntries {
    Table,
    EntryId,
    BusinessId,
    Title,
    Content,
    ContentType,
    ImprovedTitle,
    ImprovedContent,
    Icon,
    Categories,
    CreatedAt,
    UpdatedAt,
}
