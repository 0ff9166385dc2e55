//! Browser page script for the migration dashboard.
//!
//! On page load it fetches the saved-query catalog from `/api/queries` and
//! fills the `querySelect` dropdown with one option per entry.
//!
//! This crate is intentionally a stub by default so it builds and tests on
//! native targets without requiring wasm toolchains.
//!
//! Enable the real page script with: `--features web` (and a wasm32 target).

pub mod catalog;
pub mod error;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
