use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum PortfolioImages {
    Table,
    PortfolioId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Attachments are always fetched and deleted by owning item.
        manager
            .create_index(
                Index::create()
                    .name("idx_portfolio_images_portfolio_id")
                    .table(PortfolioImages::Table)
                    .col(PortfolioImages::PortfolioId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_portfolio_images_portfolio_id")
                    .table(PortfolioImages::Table)
                    .to_owned(),
            )
            .await
    }
}
