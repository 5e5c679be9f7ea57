//! Quote service functions with database access.
//!
//! These functions resolve catalog prices (cache first) and drive the pure
//! calculator; persistence of accepted quotes also lives here.

use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::cache::AppCache;
use crate::db;
use crate::models::Product;

use super::calculators::{compute_quote, QuoteBreakdown, QuoteOptions, RateTable};
use super::queries;

/// Quote calculation error types
#[derive(Debug, Clone)]
pub enum QuoteError {
    UnknownProduct {
        slug: String,
    },
    InvalidDimensions {
        length: Decimal,
        width: Decimal,
    },
    Storage {
        message: String,
    },
}

impl std::fmt::Display for QuoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteError::UnknownProduct { slug } => {
                write!(f, "No active product found for slug '{}'", slug)
            }
            QuoteError::InvalidDimensions { length, width } => {
                write!(f, "Dimensions must be positive (got {} x {})", length, width)
            }
            QuoteError::Storage { message } => {
                write!(f, "Failed to record quote: {}", message)
            }
        }
    }
}

impl std::error::Error for QuoteError {}

/// Compute a quote for a catalog product.
///
/// Resolves the product's base price per area from the cache (falling back
/// to the database), then runs the pure calculator against it.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `cache` - Application cache (for product lookup)
/// * `slug` - Catalog slug of the stone being quoted
/// * `length`, `width` - project dimensions in meters
/// * `options` - thickness/finish/edge selections and service toggles
/// * `rates` - rate constants for the computation
///
/// # Returns
/// The resolved product and its `QuoteBreakdown`
pub async fn quote_for_product(
    pool: &PgPool,
    cache: &AppCache,
    slug: &str,
    length: Decimal,
    width: Decimal,
    options: &QuoteOptions,
    rates: &RateTable,
) -> Result<(Arc<Product>, QuoteBreakdown), QuoteError> {
    // Try cache first
    let product = if let Some(cached) = cache.products.get(slug).await {
        tracing::debug!("Cache HIT for product: {}", slug);
        cached
    } else {
        tracing::debug!("Cache MISS for product: {}", slug);
        let product = db::get_product(pool, slug)
            .await
            .map_err(|_| QuoteError::UnknownProduct {
                slug: slug.to_string(),
            })?;

        let product = Arc::new(product);
        cache
            .products
            .insert(slug.to_string(), Arc::clone(&product))
            .await;
        product
    };

    let breakdown = compute_quote(product.base_price_per_area, length, width, options, rates)
        .ok_or(QuoteError::InvalidDimensions { length, width })?;

    Ok((product, breakdown))
}

/// Record a computed quote for later retrieval.
///
/// Pass-through persistence: the stored row is the input echo plus the
/// computed totals, nothing is derived here.
pub async fn record_quote(
    pool: &PgPool,
    product_id: Option<Uuid>,
    base_price_per_area: Decimal,
    length: Decimal,
    width: Decimal,
    options: &QuoteOptions,
    currency: &str,
    breakdown: &QuoteBreakdown,
) -> Result<Uuid, QuoteError> {
    queries::insert_quote(
        pool,
        product_id,
        base_price_per_area,
        length,
        width,
        options,
        currency,
        breakdown,
    )
    .await
    .map_err(|e| QuoteError::Storage {
        message: e.to_string(),
    })
}
