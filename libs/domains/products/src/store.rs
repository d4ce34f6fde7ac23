//! In-memory implementation of ProductRepository

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{Product, ProductStatus};
use crate::repository::ProductRepository;

/// Immutable, shareable product catalog.
///
/// Built once at startup and never mutated afterwards, so clones share the
/// same backing slice and concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<[Product]>,
}

impl InMemoryProductRepository {
    /// Create a store over the given products, kept in the order given
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// Create a store holding the demo catalog, timestamped relative to now
    pub fn seeded() -> Self {
        let store = Self::new(seed_catalog(Utc::now()));
        tracing::info!(products = store.len(), "Catalog store seeded");
        store
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.to_vec())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn count(&self) -> ProductResult<usize> {
        Ok(self.products.len())
    }
}

struct Seed {
    name: &'static str,
    description: &'static str,
    cents: i64,
    category: &'static str,
    stock: u32,
    sku: &'static str,
    status: ProductStatus,
    created_days_ago: i64,
    updated_days_ago: i64,
}

const SEED: [Seed; 5] = [
    Seed {
        name: "Laptop",
        description: "High-performance laptop for developers",
        cents: 99999,
        category: "Electronics",
        stock: 50,
        sku: "LAPTOP-001",
        status: ProductStatus::Active,
        created_days_ago: 30,
        updated_days_ago: 5,
    },
    Seed {
        name: "Wireless Mouse",
        description: "Ergonomic wireless mouse with extended battery",
        cents: 2999,
        category: "Electronics",
        stock: 200,
        sku: "MOUSE-001",
        status: ProductStatus::Active,
        created_days_ago: 60,
        updated_days_ago: 2,
    },
    Seed {
        name: "USB-C Hub",
        description: "Multi-port USB-C hub with HDMI and SD card reader",
        cents: 4999,
        category: "Electronics",
        stock: 120,
        sku: "HUB-001",
        status: ProductStatus::Active,
        created_days_ago: 45,
        updated_days_ago: 1,
    },
    Seed {
        name: "Mechanical Keyboard",
        description: "RGB mechanical keyboard with hot-swappable switches",
        cents: 14999,
        category: "Electronics",
        stock: 75,
        sku: "KB-001",
        status: ProductStatus::Active,
        created_days_ago: 20,
        updated_days_ago: 0,
    },
    Seed {
        name: "Monitor Stand",
        description: "Adjustable monitor stand with storage drawer",
        cents: 3999,
        category: "Office",
        stock: 0,
        sku: "STAND-001",
        status: ProductStatus::Inactive,
        created_days_ago: 15,
        updated_days_ago: 7,
    },
];

/// Demo catalog: four ACTIVE electronics and one INACTIVE, out-of-stock
/// office item. IDs are random per call.
pub fn seed_catalog(now: DateTime<Utc>) -> Vec<Product> {
    SEED.iter()
        .map(|s| Product {
            id: Uuid::new_v4(),
            name: s.name.to_string(),
            description: Some(s.description.to_string()),
            price: Decimal::new(s.cents, 2),
            category: s.category.to_string(),
            stock_quantity: s.stock,
            sku: s.sku.to_string(),
            images: Vec::new(),
            attributes: BTreeMap::new(),
            status: s.status,
            created_at: now - Duration::days(s.created_days_ago),
            updated_at: now - Duration::days(s.updated_days_ago),
            created_by: None,
            updated_by: None,
        })
        .collect()
}
