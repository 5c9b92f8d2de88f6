use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Portfolio {
    Table,
    VideoUrl,
    Problem,
    Solution,
    Result,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite only accepts one column per ALTER TABLE.
        manager
            .alter_table(
                Table::alter()
                    .table(Portfolio::Table)
                    .add_column(ColumnDef::new(Portfolio::VideoUrl).string().null())
                    .to_owned(),
            )
            .await?;

        for column in [Portfolio::Problem, Portfolio::Solution, Portfolio::Result] {
            manager
                .alter_table(
                    Table::alter()
                        .table(Portfolio::Table)
                        .add_column(ColumnDef::new(column).text().null())
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            Portfolio::VideoUrl,
            Portfolio::Problem,
            Portfolio::Solution,
            Portfolio::Result,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(Portfolio::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
