//! Database models for recorded quotes.
//!
//! These models use sqlx's FromRow derive for direct database deserialization.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Recorded quote from the quotes table.
///
/// Stores the full input echo alongside the computed totals so a saved
/// quote can be shown again without recomputation.
#[derive(Debug, Clone, FromRow)]
pub struct QuoteRecord {
    pub id: Uuid,
    pub product_id: Option<Uuid>,
    pub base_price_per_area: Decimal,
    pub length: Decimal,
    pub width: Decimal,
    pub thickness: String,
    pub finish: String,
    pub edge: String,
    pub installation: bool,
    pub delivery: bool,
    pub currency: String,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}
