//! Products Domain
//!
//! Read-only product catalog: a seeded in-memory store plus the query
//! engine that lists, filters, sorts and paginates it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, response envelope
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← listActive / filterSearch / getById / listByCategory
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Read-only data access (trait + in-memory store)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, query DTOs
//! └─────────────┘
//! ```
//!
//! Parameter normalization, sorting and pagination live in [`query`] and are
//! applied by the handlers before the service runs.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let service = ProductService::new(InMemoryProductRepository::seeded());
//! let api = handlers::router(service.clone());
//! let alias = handlers::search_alias_router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    DataSource, PaginationInfo, Product, ProductImage, ProductPage, ProductStatus,
    ResponseMetadata, SearchResult,
};
pub use query::{PageRequest, SearchCriteria, SortKey, SortOrder};
pub use repository::ProductRepository;
pub use service::ProductService;
pub use store::InMemoryProductRepository;
