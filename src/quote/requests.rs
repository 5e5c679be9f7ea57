//! Request DTOs for quote API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::calculators::QuoteOptions;

/// Request to compute an ad-hoc quote from a caller-supplied unit price.
#[derive(Debug, Deserialize)]
pub struct ComputeQuoteRequest {
    pub base_price_per_area: Decimal,
    pub length: Decimal,
    pub width: Decimal,
    #[serde(flatten)]
    pub options: QuoteOptionsRequest,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Request to quote a catalog product (the unit price comes from the catalog).
#[derive(Debug, Deserialize)]
pub struct ProductQuoteRequest {
    pub length: Decimal,
    pub width: Decimal,
    #[serde(flatten)]
    pub options: QuoteOptionsRequest,
    /// Record the quote for later retrieval
    #[serde(default)]
    pub save: bool,
}

/// Option selections shared by both quote requests.
///
/// Defaults mirror the storefront calculator's initial state: 20mm polished
/// slab with a straight edge, delivery on, installation off.
#[derive(Debug, Deserialize)]
pub struct QuoteOptionsRequest {
    #[serde(default = "default_thickness")]
    pub thickness: String,
    #[serde(default = "default_finish")]
    pub finish: String,
    #[serde(default = "default_edge")]
    pub edge: String,
    #[serde(default)]
    pub installation: bool,
    #[serde(default = "default_delivery")]
    pub delivery: bool,
}

fn default_thickness() -> String {
    "20mm".to_string()
}

fn default_finish() -> String {
    "polished".to_string()
}

fn default_edge() -> String {
    "straight".to_string()
}

fn default_delivery() -> bool {
    true
}

impl From<QuoteOptionsRequest> for QuoteOptions {
    fn from(req: QuoteOptionsRequest) -> Self {
        QuoteOptions {
            thickness: req.thickness,
            finish: req.finish,
            edge: req.edge,
            installation: req.installation,
            delivery: req.delivery,
        }
    }
}
