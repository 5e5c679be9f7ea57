//! Database queries for quote records.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;

use super::calculators::{QuoteBreakdown, QuoteOptions};
use super::models::QuoteRecord;

/// Insert a quote record, returning its generated id.
pub async fn insert_quote(
    pool: &PgPool,
    product_id: Option<Uuid>,
    base_price_per_area: Decimal,
    length: Decimal,
    width: Decimal,
    options: &QuoteOptions,
    currency: &str,
    breakdown: &QuoteBreakdown,
) -> Result<Uuid, AppError> {
    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO quotes (
            id, product_id, base_price_per_area, length, width,
            thickness, finish, edge, installation, delivery,
            currency, subtotal, tax, total, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, now())
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(product_id)
    .bind(base_price_per_area)
    .bind(length)
    .bind(width)
    .bind(&options.thickness)
    .bind(&options.finish)
    .bind(&options.edge)
    .bind(options.installation)
    .bind(options.delivery)
    .bind(currency)
    .bind(breakdown.subtotal)
    .bind(breakdown.tax)
    .bind(breakdown.total)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Get a recorded quote by id.
pub async fn get_quote(pool: &PgPool, id: Uuid) -> Result<QuoteRecord, AppError> {
    let quote = sqlx::query_as::<_, QuoteRecord>(
        r#"
        SELECT
            id, product_id, base_price_per_area, length, width,
            thickness, finish, edge, installation, delivery,
            currency, subtotal, tax, total, created_at
        FROM quotes
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(quote)
}
