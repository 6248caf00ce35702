//! `tt-network` — the static route/stop catalog the simulation runs over.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`catalog`] | `Route`, `Stop`, `RouteCatalog` (+ stop R-tree), builder    |
//! | [`loader`]  | `load_catalog_dir`, `load_catalog_readers` (CSV)            |
//! | [`search`]  | Route search by code / localized name                       |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! The catalog is read-only once built.  Every route in a built catalog has
//! a non-empty path; the movement model relies on that.

pub mod catalog;
pub mod error;
pub mod loader;
pub mod search;

#[cfg(test)]
mod tests;

pub use catalog::{Route, RouteCatalog, RouteCatalogBuilder, Stop};
pub use error::{NetworkError, NetworkResult};
pub use loader::{load_catalog_dir, load_catalog_readers};
