pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_portfolio_table;
mod m20250301_000002_create_inquiries_table;
mod m20250308_000001_add_case_study_columns_to_portfolio;
mod m20250315_000001_create_portfolio_images_table;
mod m20250315_000002_add_portfolio_images_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_portfolio_table::Migration),
            Box::new(m20250301_000002_create_inquiries_table::Migration),
            Box::new(m20250308_000001_add_case_study_columns_to_portfolio::Migration),
            Box::new(m20250315_000001_create_portfolio_images_table::Migration),
            Box::new(m20250315_000002_add_portfolio_images_index::Migration),
        ]
    }
}
