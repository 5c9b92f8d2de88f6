use sea_orm::*;

use crate::models::inquiries::{self, CreateInquiry};

/// Record a new inquiry from the public contact form.
pub async fn insert_inquiry(
    db: &DatabaseConnection,
    input: CreateInquiry,
) -> Result<inquiries::Model, DbErr> {
    let new_inquiry = inquiries::ActiveModel {
        name: Set(input.name),
        email: Set(input.email),
        phone: Set(input.phone),
        budget: Set(input.budget),
        message: Set(input.message),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    new_inquiry.insert(db).await
}

/// Fetch all inquiries, newest first.
pub async fn get_all_inquiries(db: &DatabaseConnection) -> Result<Vec<inquiries::Model>, DbErr> {
    inquiries::Entity::find()
        .order_by_desc(inquiries::Column::CreatedAt)
        .order_by_desc(inquiries::Column::Id)
        .all(db)
        .await
}
