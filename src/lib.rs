/// Aroma Quest — Shared Library
///
/// This crate contains the shared business logic, models,
/// and utilities used across all API handlers: the catalog
/// loader, text normalizer, signature gate, voucher code
/// generator, and the validation engine that ties them together.
///
/// Each serverless function in `api/` imports from this library
/// to keep handlers thin and logic reusable.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod response;
pub mod signature;
pub mod text;
pub mod voucher;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize structured logging for a handler process.
///
/// Level defaults to `info`; override with `RUST_LOG`. Each serverless
/// instance runs one `main`, so this is called at most once per process.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
