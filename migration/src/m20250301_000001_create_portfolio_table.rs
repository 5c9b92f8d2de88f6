use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `portfolio` table and its columns.
#[derive(DeriveIden)]
enum Portfolio {
    Table,
    Id,
    Title,
    Category,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Portfolio::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Portfolio::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Portfolio::Title).string().not_null())
                    .col(ColumnDef::new(Portfolio::Category).string().not_null())
                    .col(
                        ColumnDef::new(Portfolio::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Portfolio::Table).to_owned())
            .await
    }
}
