use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `portfolio_images` table and its columns.
#[derive(DeriveIden)]
enum PortfolioImages {
    Table,
    Id,
    PortfolioId,
    Url,
    MediaType,
    IsThumbnail,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Portfolio {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioImages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PortfolioImages::PortfolioId).integer().not_null())
                    .col(ColumnDef::new(PortfolioImages::Url).string().not_null())
                    .col(
                        ColumnDef::new(PortfolioImages::MediaType)
                            .string()
                            .not_null()
                            .default("image"),
                    )
                    .col(
                        ColumnDef::new(PortfolioImages::IsThumbnail)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_images_portfolio_id")
                            .from(PortfolioImages::Table, PortfolioImages::PortfolioId)
                            .to(Portfolio::Table, Portfolio::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioImages::Table).to_owned())
            .await
    }
}
