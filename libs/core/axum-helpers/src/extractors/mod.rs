//! Custom extractors for Axum handlers.
//!
//! Reusable extractors that reduce boilerplate and route every rejection
//! through [`crate::errors::AppError`].

pub mod query_params;
pub mod uuid_path;

pub use query_params::QueryParams;
pub use uuid_path::UuidPath;
