use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::Product;

/// Read-only access to the product catalog
///
/// Implementations hand out snapshots; callers filter, sort and paginate
/// on their side. The seeded in-memory store is the only implementation
/// shipped today.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product in the catalog, in insertion order
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Number of products held by the store
    async fn count(&self) -> ProductResult<usize>;
}
