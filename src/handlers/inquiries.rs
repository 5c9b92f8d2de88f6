use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::{AdminCredential, AuthorizerData, require_admin};
use crate::db::inquiries as inquiry_db;
use crate::error::ApiError;
use crate::models::inquiries::CreateInquiry;

/// POST /api/inquiries — record a contact-form submission (public).
pub async fn submit_inquiry(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateInquiry>,
) -> Result<HttpResponse, ApiError> {
    let inquiry = inquiry_db::insert_inquiry(db.get_ref(), body.into_inner()).await?;
    tracing::info!(id = inquiry.id, "Received inquiry");
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

/// POST /api/admin/inquiries — list all inquiries, newest first (requires password).
pub async fn list_inquiries(
    db: web::Data<DatabaseConnection>,
    authorizer: web::Data<AuthorizerData>,
    body: Option<web::Json<AdminCredential>>,
) -> Result<HttpResponse, ApiError> {
    let credential = body.as_ref().and_then(|b| b.password.as_deref());
    require_admin(authorizer.get_ref().as_ref(), credential)?;

    let inquiries = inquiry_db::get_all_inquiries(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(inquiries))
}
