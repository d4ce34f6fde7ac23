//! Product Service - Query Engine over the catalog store

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{DataSource, Product, SearchResult};
use crate::query::{paginate, sort_products, PageRequest, SearchCriteria, SortKey, SortOrder};
use crate::repository::ProductRepository;

/// Product service providing the read-only query operations
///
/// Every operation is a pure function of the repository snapshot and its
/// (already normalized) arguments.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// ACTIVE products, sorted and paginated
    #[instrument(skip(self))]
    pub async fn list_active(
        &self,
        page: PageRequest,
        sort_by: SortKey,
        order: SortOrder,
    ) -> ProductResult<SearchResult> {
        let mut products: Vec<Product> = self
            .repository
            .list_all()
            .await?
            .into_iter()
            .filter(Product::is_active)
            .collect();

        sort_products(&mut products, sort_by, order);

        Ok(into_result(products, page, true, DataSource::MongoDb))
    }

    /// Filtered search over the whole catalog, in store order
    #[instrument(skip(self))]
    pub async fn filter_search(
        &self,
        criteria: &SearchCriteria,
        page: PageRequest,
    ) -> ProductResult<SearchResult> {
        let matcher = criteria.matcher();
        let products: Vec<Product> = self
            .repository
            .list_all()
            .await?
            .into_iter()
            .filter(|p| matcher.matches(p))
            .collect();

        tracing::debug!(matches = products.len(), "Filter search evaluated");

        Ok(into_result(products, page, false, DataSource::Elasticsearch))
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// ACTIVE, in-stock products of a single category
    #[instrument(skip(self))]
    pub async fn list_by_category(
        &self,
        category: &str,
        page: PageRequest,
    ) -> ProductResult<SearchResult> {
        self.filter_search(&SearchCriteria::for_category(category), page)
            .await
    }

    /// Number of products in the catalog
    pub async fn catalog_size(&self) -> ProductResult<usize> {
        self.repository.count().await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

fn into_result(
    products: Vec<Product>,
    request: PageRequest,
    cached: bool,
    source: DataSource,
) -> SearchResult {
    let page = paginate(products, request);
    SearchResult {
        products: page.items,
        page: page.page,
        page_size: page.page_size,
        total_count: page.total_count,
        total_pages: page.total_pages,
        cached,
        source,
    }
}
