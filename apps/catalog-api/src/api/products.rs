//! Catalog API routes

use axum::Router;
use domain_products::handlers;

use crate::state::AppState;

/// Versioned catalog routes
pub fn router(state: &AppState) -> Router {
    handlers::router(state.catalog.clone())
}

/// Root-level `/search` alias
pub fn search_alias(state: &AppState) -> Router {
    handlers::search_alias_router(state.catalog.clone())
}
