use sea_orm::*;
use std::collections::HashMap;

use crate::models::portfolio::{self, NewPortfolio, PortfolioWithImages};
use crate::models::portfolio_images::{self, NewAttachment};

/// Insert a portfolio item and its attachments in one transaction.
///
/// The first attachment (in the given order) is flagged as the thumbnail.
pub async fn insert_portfolio_with_images(
    db: &DatabaseConnection,
    input: NewPortfolio,
    attachments: Vec<NewAttachment>,
) -> Result<portfolio::Model, DbErr> {
    let txn = db.begin().await?;

    let item = portfolio::ActiveModel {
        title: Set(input.title),
        category: Set(input.category),
        video_url: Set(input.video_url),
        problem: Set(input.problem),
        solution: Set(input.solution),
        result: Set(input.result),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    for (index, attachment) in attachments.into_iter().enumerate() {
        portfolio_images::ActiveModel {
            portfolio_id: Set(item.id),
            url: Set(attachment.url),
            media_type: Set(attachment.media_type),
            is_thumbnail: Set(index == 0),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    Ok(item)
}

/// Fetch all portfolio items, newest first, each with its attachments.
pub async fn get_all_portfolios(
    db: &DatabaseConnection,
) -> Result<Vec<PortfolioWithImages>, DbErr> {
    let items = portfolio::Entity::find()
        .order_by_desc(portfolio::Column::CreatedAt)
        .order_by_desc(portfolio::Column::Id)
        .all(db)
        .await?;

    if items.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = items.iter().map(|item| item.id).collect();
    let images = portfolio_images::Entity::find()
        .filter(portfolio_images::Column::PortfolioId.is_in(ids))
        .order_by_asc(portfolio_images::Column::Id)
        .all(db)
        .await?;

    let mut grouped: HashMap<i32, Vec<portfolio_images::Model>> = HashMap::new();
    for image in images {
        grouped.entry(image.portfolio_id).or_default().push(image);
    }

    Ok(items
        .into_iter()
        .map(|item| {
            let images = grouped.remove(&item.id).unwrap_or_default();
            PortfolioWithImages { item, images }
        })
        .collect())
}

/// Fetch a single portfolio item with its attachments.
pub async fn get_portfolio_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<PortfolioWithImages>, DbErr> {
    let Some(item) = portfolio::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let images = get_images_for_portfolio(db, id).await?;
    Ok(Some(PortfolioWithImages { item, images }))
}

/// Fetch the attachments of one item in upload order.
pub async fn get_images_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> Result<Vec<portfolio_images::Model>, DbErr> {
    portfolio_images::Entity::find()
        .filter(portfolio_images::Column::PortfolioId.eq(portfolio_id))
        .order_by_asc(portfolio_images::Column::Id)
        .all(db)
        .await
}

pub async fn count_portfolios(db: &DatabaseConnection) -> Result<u64, DbErr> {
    portfolio::Entity::find().count(db).await
}

/// Delete every attachment row of an item.
pub async fn delete_images_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> Result<DeleteResult, DbErr> {
    portfolio_images::Entity::delete_many()
        .filter(portfolio_images::Column::PortfolioId.eq(portfolio_id))
        .exec(db)
        .await
}

/// Delete a portfolio item by ID. Remaining attachment rows go with it via
/// the foreign-key cascade.
pub async fn delete_portfolio(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
    portfolio::Entity::delete_by_id(id).exec(db).await
}
