use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumString, IntoStaticStr};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Product lifecycle status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    /// Available for purchase; the only status shown in the default listing
    #[default]
    Active,
    /// Temporarily unavailable
    Inactive,
    /// No longer sold
    Discontinued,
}

/// Product image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Image URL
    pub url: String,
    /// Alternative text for accessibility
    #[serde(default)]
    pub alt: Option<String>,
    /// Whether this is the primary/hero image
    #[serde(default)]
    pub primary: bool,
}

/// Product catalog item with pricing, inventory, and metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier
    pub id: Uuid,
    /// Product name
    #[schema(example = "Laptop")]
    pub name: String,
    /// Product description
    #[serde(default)]
    pub description: Option<String>,
    /// Product price
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 999.99)]
    pub price: Decimal,
    /// Product category
    #[schema(example = "Electronics")]
    pub category: String,
    /// Units available; anything above zero counts as in stock
    pub stock_quantity: u32,
    /// Stock Keeping Unit
    #[schema(example = "LAPTOP-001")]
    pub sku: String,
    /// Product images
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Free-form attributes (color, size, weight, ...)
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Current status
    pub status: ProductStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// User who created the product
    #[serde(default)]
    pub created_by: Option<String>,
    /// User who last updated the product
    #[serde(default)]
    pub updated_by: Option<String>,
}

impl Product {
    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// Case-insensitive substring match against name or description.
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

/// Cosmetic label for where a result claims to come from.
///
/// Nothing in this service talks to these systems; the label is part of the
/// response contract only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, IntoStaticStr, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DataSource {
    #[serde(rename = "mongodb")]
    #[strum(serialize = "mongodb")]
    MongoDb,
    Elasticsearch,
    Redis,
}

/// Query Engine output: one page of products plus counts and cosmetic flags.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub products: Vec<Product>,
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
    pub cached: bool,
    pub source: DataSource,
}

/// Parses an optional query value, treating an empty value (`?page=`) as absent
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Query parameters for the default listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ProductListQuery {
    /// Page number (1-based)
    #[param(example = 1)]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i32>,
    /// Items per page (1-100, anything else falls back to 20)
    #[param(example = 20)]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size: Option<i32>,
    /// Sort field: name, price, or created
    #[param(example = "name")]
    pub sort_by: Option<String>,
    /// Sort order: asc or desc
    #[param(example = "asc")]
    pub sort_order: Option<String>,
}

/// Query parameters for filtered search
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct SearchQuery {
    /// Search text, matched against name and description
    #[param(example = "laptop")]
    pub query: Option<String>,
    /// Category filter (case-insensitive exact match)
    #[param(example = "Electronics")]
    pub category: Option<String>,
    /// Minimum price, inclusive
    #[param(value_type = Option<f64>, example = 500)]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_price: Option<Decimal>,
    /// Maximum price, inclusive
    #[param(value_type = Option<f64>, example = 1500)]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_price: Option<Decimal>,
    /// true = in stock and active only; false = also include inactive products
    #[param(example = true)]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub in_stock: Option<bool>,
    /// Page number (1-based)
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i32>,
    /// Items per page (1-100, anything else falls back to 20)
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size: Option<i32>,
}

/// Query parameters for category browsing
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct CategoryQuery {
    /// Page number (1-based)
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i32>,
    /// Items per page (1-100, anything else falls back to 20)
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size: Option<i32>,
}

/// Pagination block of the list envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

/// Cosmetic response metadata. Which optional fields appear depends on the
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub cached: bool,
    pub source: DataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "120s")]
    pub cache_age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "3ms")]
    pub search_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "current")]
    pub data_freshness: Option<String>,
    /// When the envelope was built
    pub timestamp: DateTime<Utc>,
}

impl ResponseMetadata {
    pub fn new(cached: bool, source: DataSource) -> Self {
        Self {
            cached,
            source,
            cache_age: None,
            search_time: None,
            data_freshness: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_cache_age(mut self, seconds: u64) -> Self {
        self.cache_age = Some(format!("{}s", seconds));
        self
    }

    pub fn with_search_time(mut self, millis: u128) -> Self {
        self.search_time = Some(format!("{}ms", millis));
        self.data_freshness = Some("current".to_string());
        self
    }
}

/// List envelope: `{ data, pagination, metadata }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub pagination: PaginationInfo,
    pub metadata: ResponseMetadata,
}

impl ProductPage {
    /// Wrap a result; `decorate` adds the endpoint-specific metadata fields
    pub fn from_result(
        result: SearchResult,
        decorate: impl FnOnce(ResponseMetadata) -> ResponseMetadata,
    ) -> Self {
        Self {
            pagination: PaginationInfo {
                page: result.page,
                page_size: result.page_size,
                total_count: result.total_count,
                total_pages: result.total_pages,
            },
            metadata: decorate(ResponseMetadata::new(result.cached, result.source)),
            data: result.products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, description: Option<&str>) -> Product {
        let now = Utc::now();
        Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.map(str::to_string),
            price: Decimal::new(1000, 2),
            category: "Electronics".to_string(),
            stock_quantity: 0,
            sku: "SKU-1".to_string(),
            images: vec![],
            attributes: BTreeMap::new(),
            status: ProductStatus::Active,
            created_at: now,
            updated_at: now,
            created_by: None,
            updated_by: None,
        }
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ProductStatus::Discontinued).unwrap(),
            "\"DISCONTINUED\""
        );
        assert_eq!("INACTIVE".parse::<ProductStatus>().unwrap(), ProductStatus::Inactive);
        assert_eq!(ProductStatus::Active.to_string(), "ACTIVE");
    }

    #[test]
    fn test_data_source_labels() {
        assert_eq!(DataSource::MongoDb.to_string(), "mongodb");
        assert_eq!(DataSource::Elasticsearch.to_string(), "elasticsearch");
        let label: &'static str = DataSource::Redis.into();
        assert_eq!(label, "redis");
        assert_eq!(serde_json::to_string(&DataSource::MongoDb).unwrap(), "\"mongodb\"");
        assert_eq!(serde_json::to_string(&DataSource::Redis).unwrap(), "\"redis\"");
    }

    #[test]
    fn test_product_serializes_camel_case_with_numeric_price() {
        let json = serde_json::to_value(product("Laptop", None)).unwrap();
        assert!(json.get("stockQuantity").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["price"].as_f64(), Some(10.0));
        assert_eq!(json["status"], "ACTIVE");
    }

    #[test]
    fn test_matches_text_checks_name_and_description() {
        let p = product("Wireless Mouse", Some("Ergonomic design"));
        assert!(p.matches_text("mouse"));
        assert!(p.matches_text("ergonomic"));
        assert!(!p.matches_text("keyboard"));

        let bare = product("Hub", None);
        assert!(!bare.matches_text("ergonomic"));
    }

    #[test]
    fn test_envelope_shape() {
        let result = SearchResult {
            products: vec![product("Laptop", None)],
            page: 1,
            page_size: 20,
            total_count: 1,
            total_pages: 1,
            cached: true,
            source: DataSource::MongoDb,
        };
        let page = ProductPage::from_result(result, |m| m.with_cache_age(120));
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["pagination"]["pageSize"], 20);
        assert_eq!(json["pagination"]["totalCount"], 1);
        assert_eq!(json["metadata"]["cached"], true);
        assert_eq!(json["metadata"]["source"], "mongodb");
        assert_eq!(json["metadata"]["cacheAge"], "120s");
        assert!(json["metadata"]["timestamp"].is_string());
        assert!(json["metadata"].get("searchTime").is_none());
    }

    #[test]
    fn test_search_time_sets_freshness() {
        let before = Utc::now();
        let meta = ResponseMetadata::new(false, DataSource::Elasticsearch).with_search_time(4);
        assert_eq!(meta.search_time.as_deref(), Some("4ms"));
        assert_eq!(meta.data_freshness.as_deref(), Some("current"));
        assert!(meta.timestamp >= before);
    }

    #[test]
    fn test_stock_and_status_predicates() {
        let mut p = product("Stand", None);
        assert!(!p.is_in_stock());
        p.stock_quantity = 1;
        assert!(p.is_in_stock());
        p.status = ProductStatus::Inactive;
        assert!(!p.is_active());
    }
}
