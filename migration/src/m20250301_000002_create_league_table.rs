use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(League::Table)
                    .if_not_exists()
                    .col(pk_auto(League::Id))
                    .col(string(League::Name))
                    .col(string_uniq(League::Slug))
                    .col(text_null(League::Description))
                    .col(
                        timestamp_with_time_zone(League::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(League::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum League {
    Table,
    Id,
    Name,
    Slug,
    Description,
    CreatedAt,
}
