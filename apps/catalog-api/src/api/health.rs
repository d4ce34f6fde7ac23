//! Readiness endpoint

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};

use crate::state::{AppState, CatalogService};

async fn ready(State(catalog): State<CatalogService>) -> impl IntoResponse {
    let check: HealthCheckFuture = Box::pin(async {
        match catalog.catalog_size().await {
            Ok(0) => Err("catalog store is empty".to_string()),
            Ok(_) => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    });

    run_health_checks(vec![("catalog", check)]).await
}

pub fn router(state: &AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state.catalog.clone())
}
