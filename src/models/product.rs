//! Catalog product models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Catalog product from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Catalog unit price before options are applied
    pub base_price_per_area: Decimal,
    pub currency: String,
    pub image_url: Option<String>,
    pub active: bool,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Product summary for listing endpoints
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductSummary {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub base_price_per_area: Decimal,
    pub currency: String,
    pub image_url: Option<String>,
}
