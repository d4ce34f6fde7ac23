//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Read-only product catalog: listing, search, lookup and category browsing",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v1", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Read-only product catalog queries")
    )
)]
pub struct ApiDoc;
