/// Verse of the Day API — Shared Library
///
/// This crate contains the cache, upstream client, field-extraction
/// policies, and request orchestration used by the API handlers.
///
/// Each serverless function in `api/` imports from this library
/// to keep handlers thin and logic reusable.

pub mod cache;
pub mod client;
pub mod extract;
pub mod handler;
pub mod models;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
