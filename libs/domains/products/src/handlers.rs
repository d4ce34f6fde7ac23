//! HTTP handlers for the product catalog API

use axum::{
    extract::{Path, State},
    http::header::{HeaderName, HeaderValue},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestQueryResponse, BadRequestUuidResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    QueryParams, UuidPath,
};
use std::sync::Arc;
use std::time::Instant;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    CategoryQuery, DataSource, PaginationInfo, Product, ProductImage, ProductListQuery,
    ProductPage, ProductStatus, ResponseMetadata, SearchQuery,
};
use crate::query::{PageRequest, SearchCriteria, SortKey, SortOrder};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Seconds the default listing advertises as its cache age
const LISTING_CACHE_AGE_SECS: u64 = 120;
/// Seconds the root-level search alias advertises as its cache age
const SEARCH_ALIAS_CACHE_AGE_SECS: u64 = 60;

pub const DATA_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-data-source");

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        search_products,
        list_by_category,
        service_health,
    ),
    components(
        schemas(
            Product, ProductImage, ProductStatus, ProductPage,
            PaginationInfo, ResponseMetadata, DataSource
        ),
        responses(
            NotFoundResponse,
            BadRequestQueryResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Read-only product catalog queries")
    )
)]
pub struct ApiDoc;

type SharedService<R> = Arc<ProductService<R>>;

/// Create the catalog router (mounted under the versioned API prefix)
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/category/{category}", get(list_by_category))
        .route("/products/{product_id}", get(get_product))
        .route("/search", get(search_products))
        .route("/health", get(service_health))
        .with_state(Arc::new(service))
}

/// Root-level `/search` alias, kept outside the versioned prefix
pub fn search_alias_router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .route("/search", get(search_alias))
        .with_state(Arc::new(service))
}

/// List ACTIVE products, sorted and paginated
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Page of active products", body = ProductPage),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    QueryParams(query): QueryParams<ProductListQuery>,
) -> ProductResult<Json<ProductPage>> {
    let page = PageRequest::new(query.page, query.page_size);
    let sort_by = SortKey::from_param(query.sort_by.as_deref());
    let order = SortOrder::from_param(query.sort_order.as_deref());

    let result = service.list_active(page, sort_by, order).await?;
    Ok(Json(ProductPage::from_result(result, |m| {
        m.with_cache_age(LISTING_CACHE_AGE_SECS)
    })))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{product_id}",
    tag = "Products",
    params(
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product,
            headers(("x-data-source" = String, description = "Cosmetic source label"))),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    UuidPath(id): UuidPath,
) -> ProductResult<impl IntoResponse> {
    let product = service.get_by_id(id).await?;
    Ok((
        [(
            DATA_SOURCE_HEADER,
            HeaderValue::from_static(DataSource::Redis.into()),
        )],
        Json(product),
    ))
}

/// Search products with filters
#[utoipa::path(
    get,
    path = "/search",
    tag = "Products",
    params(SearchQuery),
    responses(
        (status = 200, description = "Page of matching products", body = ProductPage),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> ProductResult<Json<ProductPage>> {
    let started = Instant::now();
    let page = PageRequest::new(query.page, query.page_size);
    let result = service
        .filter_search(&SearchCriteria::from(&query), page)
        .await?;
    let elapsed = started.elapsed().as_millis();

    Ok(Json(ProductPage::from_result(result, |m| {
        m.with_search_time(elapsed)
    })))
}

/// List ACTIVE, in-stock products in a category
#[utoipa::path(
    get,
    path = "/products/category/{category}",
    tag = "Products",
    params(
        ("category" = String, Path, description = "Category name (case-insensitive)"),
        CategoryQuery
    ),
    responses(
        (status = 200, description = "Page of products in the category", body = ProductPage),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_by_category<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    Path(category): Path<String>,
    QueryParams(query): QueryParams<CategoryQuery>,
) -> ProductResult<Json<ProductPage>> {
    let page = PageRequest::new(query.page, query.page_size);
    let result = service.list_by_category(&category, page).await?;
    Ok(Json(ProductPage::from_result(result, |m| m)))
}

/// Plain-text liveness message for the catalog API
#[utoipa::path(
    get,
    path = "/health",
    tag = "Products",
    responses(
        (status = 200, description = "Service is running", body = String, content_type = "text/plain")
    )
)]
async fn service_health() -> &'static str {
    "Product search service is running"
}

async fn search_alias<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> ProductResult<Json<ProductPage>> {
    let page = PageRequest::new(query.page, query.page_size);
    let result = service
        .filter_search(&SearchCriteria::from(&query), page)
        .await?;

    Ok(Json(ProductPage::from_result(result, |m| {
        m.with_cache_age(SEARCH_ALIAS_CACHE_AGE_SECS)
    })))
}
