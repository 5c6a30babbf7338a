//! `rfpmatch-core`: shared domain building blocks.
//!
//! Pure domain primitives used by the catalog and matching crates (no IO, no HTTP).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::AnalysisId;
pub use value_object::ValueObject;
