//! Response DTOs for quote API endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::calculators::{QuoteBreakdown, RateTable, EDGE_TABLE, FINISH_TABLE, THICKNESS_TABLE};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// Itemized quote breakdown response.
///
/// Carries the raw cost components plus the grouped figures the storefront
/// calculator displays (edge folded into material, delivery into
/// installation).
#[derive(Debug, Serialize)]
pub struct QuoteBreakdownResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub area: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub perimeter: Decimal,
    pub material_cost: MoneyResponse,
    pub finish_cost: MoneyResponse,
    pub labor_cost: MoneyResponse,
    pub edge_cost: MoneyResponse,
    pub installation_cost: MoneyResponse,
    pub delivery_cost: MoneyResponse,
    pub subtotal: MoneyResponse,
    pub tax: MoneyResponse,
    pub total: MoneyResponse,
    pub display: DisplayBreakdownResponse,
}

/// Grouped figures for the storefront's four-line display.
#[derive(Debug, Serialize)]
pub struct DisplayBreakdownResponse {
    /// Material including edge treatment
    pub material_cost: MoneyResponse,
    pub finish_cost: MoneyResponse,
    pub labor_cost: MoneyResponse,
    /// Installation including delivery
    pub installation_cost: MoneyResponse,
}

impl QuoteBreakdownResponse {
    pub fn from_breakdown(breakdown: &QuoteBreakdown, currency: &str) -> Self {
        Self {
            area: breakdown.area,
            perimeter: breakdown.perimeter,
            material_cost: MoneyResponse::new(breakdown.material_cost, currency),
            finish_cost: MoneyResponse::new(breakdown.finish_cost, currency),
            labor_cost: MoneyResponse::new(breakdown.labor_cost, currency),
            edge_cost: MoneyResponse::new(breakdown.edge_cost, currency),
            installation_cost: MoneyResponse::new(breakdown.installation_cost, currency),
            delivery_cost: MoneyResponse::new(breakdown.delivery_cost, currency),
            subtotal: MoneyResponse::new(breakdown.subtotal, currency),
            tax: MoneyResponse::new(breakdown.tax, currency),
            total: MoneyResponse::new(breakdown.total, currency),
            display: DisplayBreakdownResponse {
                material_cost: MoneyResponse::new(
                    breakdown.material_cost + breakdown.edge_cost,
                    currency,
                ),
                finish_cost: MoneyResponse::new(breakdown.finish_cost, currency),
                labor_cost: MoneyResponse::new(breakdown.labor_cost, currency),
                installation_cost: MoneyResponse::new(
                    breakdown.installation_cost + breakdown.delivery_cost,
                    currency,
                ),
            },
        }
    }
}

/// Response for a catalog-backed quote.
#[derive(Debug, Serialize)]
pub struct ProductQuoteResponse {
    pub product_slug: String,
    pub product_name: String,
    pub base_price_per_area: MoneyResponse,
    pub breakdown: QuoteBreakdownResponse,
    /// Present when the quote was recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<Uuid>,
}

/// A single selectable option with its pricing effect.
#[derive(Debug, Serialize)]
pub struct OptionEntry {
    pub key: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
}

/// Response enumerating the option tables and rate constants.
#[derive(Debug, Serialize)]
pub struct QuoteOptionsResponse {
    pub thicknesses: Vec<OptionEntry>,
    pub finishes: Vec<OptionEntry>,
    pub edges: Vec<OptionEntry>,
    pub rates: RatesResponse,
}

/// Rate constants as exposed to the presentation layer.
#[derive(Debug, Serialize)]
pub struct RatesResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub labor_per_area: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub install_per_area: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub delivery_flat: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax_rate: Decimal,
}

impl QuoteOptionsResponse {
    pub fn current(rates: &RateTable) -> Self {
        let entries = |table: &[(&str, Decimal)]| -> Vec<OptionEntry> {
            table
                .iter()
                .map(|(key, value)| OptionEntry {
                    key: key.to_string(),
                    value: *value,
                })
                .collect()
        };

        Self {
            thicknesses: entries(&THICKNESS_TABLE),
            finishes: entries(&FINISH_TABLE),
            edges: entries(&EDGE_TABLE),
            rates: RatesResponse {
                labor_per_area: rates.labor_per_area,
                install_per_area: rates.install_per_area,
                delivery_flat: rates.delivery_flat,
                tax_rate: rates.tax_rate,
            },
        }
    }
}

/// Response for a previously recorded quote.
#[derive(Debug, Serialize)]
pub struct SavedQuoteResponse {
    pub id: Uuid,
    pub product_id: Option<Uuid>,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price_per_area: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub length: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub width: Decimal,
    pub thickness: String,
    pub finish: String,
    pub edge: String,
    pub installation: bool,
    pub delivery: bool,
    pub subtotal: MoneyResponse,
    pub tax: MoneyResponse,
    pub total: MoneyResponse,
    pub created_at: DateTime<Utc>,
}

/// Generic quote error response
#[derive(Debug, Serialize)]
pub struct QuoteErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
