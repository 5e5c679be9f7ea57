//! Database queries for catalog content

use sqlx::PgPool;

use crate::error::{AppError, Result};
use crate::models::{Product, ProductSummary};

/// Get an active product by slug
pub async fn get_product(pool: &PgPool, slug: &str) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        SELECT
            id,
            slug,
            name,
            category,
            description,
            base_price_per_area,
            currency,
            image_url,
            active,
            deleted_at
        FROM products
        WHERE slug = $1
          AND active = TRUE
          AND deleted_at IS NULL
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(product)
}

/// Get products with optional category filter
pub async fn get_products(
    pool: &PgPool,
    category: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<Vec<ProductSummary>> {
    let products = match category {
        Some(cat) => {
            sqlx::query_as::<_, ProductSummary>(
                r#"
                SELECT
                    slug,
                    name,
                    category,
                    base_price_per_area,
                    currency,
                    image_url
                FROM products
                WHERE active = TRUE
                  AND deleted_at IS NULL
                  AND category = $1
                ORDER BY name
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(cat)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, ProductSummary>(
                r#"
                SELECT
                    slug,
                    name,
                    category,
                    base_price_per_area,
                    currency,
                    image_url
                FROM products
                WHERE active = TRUE
                  AND deleted_at IS NULL
                ORDER BY name
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(products)
}

/// Count active products (for pagination)
pub async fn count_products(pool: &PgPool, category: Option<&str>) -> Result<i64> {
    let count: i64 = match category {
        Some(cat) => {
            sqlx::query_scalar(
                r#"
                SELECT COUNT(*)
                FROM products
                WHERE active = TRUE
                  AND deleted_at IS NULL
                  AND category = $1
                "#,
            )
            .bind(cat)
            .fetch_one(pool)
            .await?
        }
        None => {
            sqlx::query_scalar(
                r#"
                SELECT COUNT(*)
                FROM products
                WHERE active = TRUE
                  AND deleted_at IS NULL
                "#,
            )
            .fetch_one(pool)
            .await?
        }
    };

    Ok(count)
}
