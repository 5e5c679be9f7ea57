//! In-memory caching using moka
//!
//! Provides application-level caching for catalog content. The catalog
//! changes only when the CMS publishes an edit, so generous TTLs are used.

use moka::future::Cache;
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

use crate::db::queries;
use crate::models::{Product, ProductSummary};

/// Application cache holding catalog products and listings
#[derive(Clone)]
pub struct AppCache {
    /// Catalog products (slug -> Product)
    pub products: Cache<String, Arc<Product>>,
    /// Product listings (cache_key -> Vec<ProductSummary>)
    pub listings: Cache<String, Arc<Vec<ProductSummary>>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Products: 500 entries, 30 min TTL, 10 min idle
            products: Cache::builder()
                .max_capacity(500)
                .time_to_live(Duration::from_secs(30 * 60))
                .time_to_idle(Duration::from_secs(10 * 60))
                .build(),

            // Listings: 50 entries (categories + pages), 15 min TTL
            listings: Cache::builder()
                .max_capacity(50)
                .time_to_live(Duration::from_secs(15 * 60))
                .time_to_idle(Duration::from_secs(5 * 60))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            products_size: self.products.entry_count(),
            listings_size: self.listings.entry_count(),
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.products.invalidate_all();
        self.listings.invalidate_all();
        info!("All caches invalidated");
    }

    /// Invalidate a specific product by slug
    pub async fn invalidate_product(&self, slug: &str) {
        self.products.invalidate(slug).await;
        // Also invalidate listings since they might include this product
        self.listings.invalidate_all();
        info!("Cache invalidated for product: {}", slug);
    }

    /// Generate cache key for product listing
    pub fn listing_key(category: Option<&str>, page: i64) -> String {
        match category {
            Some(cat) => format!("products:{}:{}", cat, page),
            None => format!("products:all:{}", page),
        }
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub products_size: u64,
    pub listings_size: u64,
}

/// Start background cache warmer
///
/// Warms the cache on startup and refreshes every 10 minutes.
pub async fn start_cache_warmer(cache: AppCache, db: PgPool) {
    // Initial warm-up
    warm_cache(&cache, &db).await;

    // Periodic refresh every 10 minutes
    let mut interval = interval(Duration::from_secs(10 * 60));
    loop {
        interval.tick().await;
        warm_cache(&cache, &db).await;
    }
}

/// Warm the cache with commonly accessed data
async fn warm_cache(cache: &AppCache, db: &PgPool) {
    info!("Starting cache warm-up...");

    // Warm first page of the product listing
    let summaries = match queries::get_products(db, None, 12, 0).await {
        Ok(products) => {
            let key = AppCache::listing_key(None, 1);
            cache.listings.insert(key, Arc::new(products.clone())).await;
            products
        }
        Err(e) => {
            warn!("Failed to warm product listing cache: {}", e);
            vec![]
        }
    };

    // Warm the products on that page
    for summary in &summaries {
        match queries::get_product(db, &summary.slug).await {
            Ok(product) => {
                cache
                    .products
                    .insert(summary.slug.clone(), Arc::new(product))
                    .await;
            }
            Err(e) => warn!("Failed to warm product cache for {}: {}", summary.slug, e),
        }
    }

    info!("Cache warm-up complete. Stats: {:?}", cache.stats());
}
