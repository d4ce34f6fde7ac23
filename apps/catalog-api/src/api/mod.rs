//! API routes module

pub mod health;
pub mod products;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Routes mounted under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/v1", products::router(state))
}

/// Routes mounted at the root: liveness, readiness and the search alias
pub fn root_routes(state: &AppState) -> Router {
    Router::new()
        .merge(health_router(state.config.app))
        .merge(health::router(state))
        .merge(products::search_alias(state))
}

/// Fully layered application router
pub fn app(state: &AppState) -> std::io::Result<Router> {
    create_router::<ApiDoc>(routes(state), root_routes(state), &state.config.server)
}
