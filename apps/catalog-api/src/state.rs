//! Application state management

use domain_products::{InMemoryProductRepository, ProductService};

pub type CatalogService = ProductService<InMemoryProductRepository>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub catalog: CatalogService,
}

impl AppState {
    pub fn new(config: crate::config::Config, store: InMemoryProductRepository) -> Self {
        Self {
            config,
            catalog: ProductService::new(store),
        }
    }
}
