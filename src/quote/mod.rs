//! Quote engine module for the StoneHaven storefront.
//!
//! Computes itemized price breakdowns for stone projects. The math lives
//! in `calculators` as pure functions; the storefront calls this module
//! over HTTP/JSON on every input change.

pub mod calculators;
pub mod models;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{compute_quote, round_money, QuoteBreakdown, QuoteOptions, RateTable};
pub use routes::router;
pub use services::QuoteError;
