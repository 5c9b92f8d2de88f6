use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::portfolio_images;

/// SeaORM entity for the `portfolio` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub category: String,
    pub video_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub problem: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub solution: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub result: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::portfolio_images::Entity")]
    Images,
}

impl Related<super::portfolio_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Text fields of a new portfolio item, as accepted by the create form.
#[derive(Debug, Clone, Default)]
pub struct NewPortfolio {
    pub title: String,
    pub category: String,
    pub video_url: Option<String>,
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub result: Option<String>,
}

/// A portfolio item together with its attachments, in upload order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioWithImages {
    #[serde(flatten)]
    pub item: Model,
    pub images: Vec<portfolio_images::Model>,
}
