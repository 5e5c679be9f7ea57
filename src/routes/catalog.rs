//! Catalog route handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::cache::AppCache;
use crate::db;
use crate::error::Result;
use crate::models::{Product, ProductSummary};
use crate::AppState;

/// Query parameters for product listing
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

const PRODUCTS_PER_PAGE: i64 = 12;

/// Product listing response
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductSummary>,
    pub page: i64,
    pub total_pages: i64,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Product listing
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<ProductListResponse>> {
    list_products(&state, None, query.page).await
}

/// Product listing by category
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<ProductListResponse>> {
    list_products(&state, Some(&category), query.page).await
}

/// Internal function to build a product listing page
async fn list_products(
    state: &AppState,
    category: Option<&str>,
    page: i64,
) -> Result<Json<ProductListResponse>> {
    let offset = (page - 1) * PRODUCTS_PER_PAGE;

    // Try cache first
    let key = AppCache::listing_key(category, page);
    let products: Vec<ProductSummary> = if let Some(cached) = state.cache.listings.get(&key).await
    {
        tracing::debug!("Cache HIT for listing: {}", key);
        (*cached).clone()
    } else {
        tracing::debug!("Cache MISS for listing: {}", key);
        let products = db::get_products(&state.db, category, PRODUCTS_PER_PAGE, offset).await?;
        state
            .cache
            .listings
            .insert(key, Arc::new(products.clone()))
            .await;
        products
    };

    let total = db::count_products(&state.db, category).await?;
    let total_pages = (total + PRODUCTS_PER_PAGE - 1) / PRODUCTS_PER_PAGE;

    Ok(Json(ProductListResponse {
        products,
        page,
        total_pages,
        has_previous: page > 1,
        has_next: page < total_pages,
    }))
}

/// Product detail
pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Product>> {
    // Try cache first
    let product: Product = if let Some(cached) = state.cache.products.get(&slug).await {
        tracing::debug!("Cache HIT for product: {}", slug);
        (*cached).clone()
    } else {
        tracing::debug!("Cache MISS for product: {}", slug);
        let product = db::get_product(&state.db, &slug).await?;
        state
            .cache
            .products
            .insert(slug.clone(), Arc::new(product.clone()))
            .await;
        product
    };

    Ok(Json(product))
}
