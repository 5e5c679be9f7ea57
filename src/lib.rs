//! StoneHaven storefront API.
//!
//! Hosts the quote engine behind an HTTP/JSON surface, together with
//! read-only catalog access and pass-through quote persistence. The
//! relational schema is owned by the CMS backend; this service reads the
//! catalog tables and writes quote records.

pub mod cache;
pub mod db;
pub mod error;
pub mod models;
pub mod quote;
pub mod routes;

use cache::AppCache;
use sqlx::PgPool;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub cache: AppCache,
}
