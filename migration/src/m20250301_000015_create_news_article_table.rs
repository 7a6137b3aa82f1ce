use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsArticle::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsArticle::Id))
                    .col(string(NewsArticle::Title))
                    .col(string_uniq(NewsArticle::Slug))
                    .col(text(NewsArticle::Body))
                    .col(boolean(NewsArticle::Published).default(false))
                    .col(timestamp_with_time_zone_null(NewsArticle::PublishedAt))
                    .col(integer_null(NewsArticle::AuthorId))
                    .col(
                        timestamp_with_time_zone(NewsArticle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(NewsArticle::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_article_author_id")
                            .from(NewsArticle::Table, NewsArticle::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsArticle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NewsArticle {
    Table,
    Id,
    Title,
    Slug,
    Body,
    Published,
    PublishedAt,
    AuthorId,
    CreatedAt,
    UpdatedAt,
}
