//! Quote API route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::AppState;

use super::calculators::{compute_quote, RateTable};
use super::queries;
use super::requests::{ComputeQuoteRequest, ProductQuoteRequest};
use super::responses::{
    MoneyResponse, ProductQuoteResponse, QuoteBreakdownResponse, QuoteErrorResponse,
    QuoteOptionsResponse, SavedQuoteResponse,
};
use super::services::{self, QuoteError};

/// Quote API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(compute))
        .route("/quote/options", get(options))
        .route("/products/:slug/quote", post(product_quote))
        .route("/quotes/:id", get(saved_quote))
}

impl IntoResponse for QuoteError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            QuoteError::UnknownProduct { .. } => (StatusCode::NOT_FOUND, "unknown_product"),
            QuoteError::InvalidDimensions { .. } => {
                (StatusCode::BAD_REQUEST, "invalid_dimensions")
            }
            QuoteError::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "storage"),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Quote error: {}", self);
        }

        let body = QuoteErrorResponse {
            error_type: error_type.to_string(),
            message: self.to_string(),
            details: None,
        };
        (status, Json(body)).into_response()
    }
}

/// Ad-hoc quote from a caller-supplied unit price
async fn compute(
    Json(req): Json<ComputeQuoteRequest>,
) -> Result<Json<QuoteBreakdownResponse>, QuoteError> {
    let options = req.options.into();
    let breakdown = compute_quote(
        req.base_price_per_area,
        req.length,
        req.width,
        &options,
        &RateTable::default(),
    )
    .ok_or(QuoteError::InvalidDimensions {
        length: req.length,
        width: req.width,
    })?;

    Ok(Json(QuoteBreakdownResponse::from_breakdown(
        &breakdown,
        &req.currency,
    )))
}

/// Option tables and rate constants for the calculator UI
async fn options() -> Json<QuoteOptionsResponse> {
    Json(QuoteOptionsResponse::current(&RateTable::default()))
}

/// Catalog-backed quote, optionally recorded
async fn product_quote(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<ProductQuoteRequest>,
) -> Result<Json<ProductQuoteResponse>, QuoteError> {
    let options = req.options.into();
    let (product, breakdown) = services::quote_for_product(
        &state.db,
        &state.cache,
        &slug,
        req.length,
        req.width,
        &options,
        &RateTable::default(),
    )
    .await?;

    let quote_id = if req.save {
        let id = services::record_quote(
            &state.db,
            Some(product.id),
            product.base_price_per_area,
            req.length,
            req.width,
            &options,
            &product.currency,
            &breakdown,
        )
        .await?;
        Some(id)
    } else {
        None
    };

    Ok(Json(ProductQuoteResponse {
        product_slug: product.slug.clone(),
        product_name: product.name.clone(),
        base_price_per_area: MoneyResponse::new(product.base_price_per_area, &product.currency),
        breakdown: QuoteBreakdownResponse::from_breakdown(&breakdown, &product.currency),
        quote_id,
    }))
}

/// Fetch a previously recorded quote
async fn saved_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> crate::error::Result<Json<SavedQuoteResponse>> {
    let quote = queries::get_quote(&state.db, id).await?;

    Ok(Json(SavedQuoteResponse {
        id: quote.id,
        product_id: quote.product_id,
        base_price_per_area: quote.base_price_per_area,
        length: quote.length,
        width: quote.width,
        thickness: quote.thickness,
        finish: quote.finish,
        edge: quote.edge,
        installation: quote.installation,
        delivery: quote.delivery,
        subtotal: MoneyResponse::new(quote.subtotal, &quote.currency),
        tax: MoneyResponse::new(quote.tax, &quote.currency),
        total: MoneyResponse::new(quote.total, &quote.currency),
        created_at: quote.created_at,
    }))
}
