//! Product catalog module.
//!
//! Holds the read-only product records the matching engine ranks. The catalog is
//! loaded once at process start and shared by every analysis; nothing in this
//! crate mutates it after construction.

pub mod catalog;
pub mod product;

pub use catalog::{Catalog, CatalogError};
pub use product::{Product, ProductSpec};
