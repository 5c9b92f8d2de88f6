use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::{AdminCredential, AuthorizerData, require_admin};
use crate::db::portfolio as portfolio_db;
use crate::error::ApiError;
use crate::storage::UploadStorage;
use crate::upload::{self, Rejected};

/// GET /api/portfolio — list all portfolio items, newest first.
pub async fn get_portfolios(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let items = portfolio_db::get_all_portfolios(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/portfolio/{id} — get a single portfolio item with its attachments.
pub async fn get_portfolio(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match portfolio_db::get_portfolio_by_id(db.get_ref(), id).await? {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Err(ApiError::NotFound(format!("Portfolio item {id} not found"))),
    }
}

/// POST /api/portfolio — create a portfolio item from a multipart form (requires password).
///
/// The password part is checked before any file is written. Files are
/// streamed to storage while the form is read; if the request is rejected or
/// the insert fails, they are removed again.
pub async fn create_portfolio(
    db: web::Data<DatabaseConnection>,
    storage: web::Data<UploadStorage>,
    authorizer: web::Data<AuthorizerData>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let authorizer = authorizer.get_ref().as_ref();
    let form = upload::read_portfolio_form(payload, storage.get_ref(), authorizer).await?;

    let (input, files) = match form.accept(authorizer) {
        Ok(accepted) => accepted,
        Err(Rejected { error, files }) => {
            upload::discard_files(storage.get_ref(), &files).await;
            return Err(error);
        }
    };

    let attachments = files.iter().map(|f| f.to_attachment()).collect();
    match portfolio_db::insert_portfolio_with_images(db.get_ref(), input, attachments).await {
        Ok(item) => {
            tracing::info!(id = item.id, files = files.len(), "Created portfolio item");
            Ok(HttpResponse::Ok().json(serde_json::json!({ "id": item.id })))
        }
        Err(e) => {
            upload::discard_files(storage.get_ref(), &files).await;
            Err(e.into())
        }
    }
}

/// DELETE /api/portfolio/{id} — delete an item, its attachment rows and blobs (requires password).
///
/// Blob removal is best-effort: a failure is logged and the row cleanup still runs.
pub async fn delete_portfolio(
    db: web::Data<DatabaseConnection>,
    storage: web::Data<UploadStorage>,
    authorizer: web::Data<AuthorizerData>,
    path: web::Path<i32>,
    body: Option<web::Json<AdminCredential>>,
) -> Result<HttpResponse, ApiError> {
    let credential = body.as_ref().and_then(|b| b.password.as_deref());
    require_admin(authorizer.get_ref().as_ref(), credential)?;

    let id = path.into_inner();
    let Some(existing) = portfolio_db::get_portfolio_by_id(db.get_ref(), id).await? else {
        return Err(ApiError::NotFound(format!("Portfolio item {id} not found")));
    };

    for image in &existing.images {
        if let Err(e) = storage.delete_url(&image.url).await {
            tracing::warn!(id, url = %image.url, error = %e, "Failed to delete attachment blob");
        }
    }

    portfolio_db::delete_images_for_portfolio(db.get_ref(), id).await?;
    let result = portfolio_db::delete_portfolio(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound(format!("Portfolio item {id} not found")));
    }

    tracing::info!(id, attachments = existing.images.len(), "Deleted portfolio item");
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
