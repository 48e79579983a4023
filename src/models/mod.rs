//! Response types served by the API.
//!
//! These types are shared across the handler, cache, and tests.

pub mod verse;
