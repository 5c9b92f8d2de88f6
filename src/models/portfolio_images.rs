use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Media kind of an attachment, stored as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[sea_orm(string_value = "image")]
    Image,
    #[sea_orm(string_value = "video")]
    Video,
}

impl MediaKind {
    /// `video/*` uploads are videos; anything else (including a missing
    /// content type) is treated as an image.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        match content_type {
            Some(ct) if ct.trim().to_ascii_lowercase().starts_with("video/") => MediaKind::Video,
            _ => MediaKind::Image,
        }
    }
}

/// SeaORM entity for the `portfolio_images` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub portfolio_id: i32,
    pub url: String,
    #[serde(rename = "type")]
    pub media_type: MediaKind,
    pub is_thumbnail: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::portfolio::Entity",
        from = "Column::PortfolioId",
        to = "super::portfolio::Column::Id",
        on_delete = "Cascade"
    )]
    Portfolio,
}

impl Related<super::portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Portfolio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// An attachment to be recorded alongside a new portfolio item.
#[derive(Debug, Clone)]
pub struct NewAttachment {
    pub url: String,
    pub media_type: MediaKind,
}
