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
                    .table(Media::Table)
                    .if_not_exists()
                    .col(pk_auto(Media::Id))
                    .col(string(Media::Url))
                    .col(string(Media::Filename))
                    .col(string(Media::MimeType))
                    .col(string_null(Media::AltText))
                    .col(integer_null(Media::UploadedBy))
                    .col(
                        timestamp_with_time_zone(Media::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_uploaded_by")
                            .from(Media::Table, Media::UploadedBy)
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
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Media {
    Table,
    Id,
    Url,
    Filename,
    MimeType,
    AltText,
    UploadedBy,
    CreatedAt,
}
