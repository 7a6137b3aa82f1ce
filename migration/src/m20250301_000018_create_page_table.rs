use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Page::Table)
                    .if_not_exists()
                    .col(pk_auto(Page::Id))
                    .col(string(Page::Title))
                    .col(string_uniq(Page::Slug))
                    .col(text(Page::Body))
                    .col(boolean(Page::Published).default(false))
                    .col(
                        timestamp_with_time_zone(Page::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Page::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Page::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Page {
    Table,
    Id,
    Title,
    Slug,
    Body,
    Published,
    CreatedAt,
    UpdatedAt,
}
