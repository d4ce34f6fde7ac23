//! Query Engine building blocks: parameter normalization, sorting,
//! filter predicates and pagination.
//!
//! Everything in here is pure; the service composes these over a store
//! snapshot.

use rust_decimal::Decimal;
use std::cmp::Ordering;
use strum::{Display, EnumString};

use crate::models::{Product, SearchQuery};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Normalized page coordinates.
///
/// Out-of-range sizes fall back to [`DEFAULT_PAGE_SIZE`] rather than being
/// clamped to [`MAX_PAGE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: Option<i32>, page_size: Option<i32>) -> Self {
        let page = page
            .filter(|p| *p >= 1)
            .and_then(|p| u32::try_from(p).ok())
            .unwrap_or(DEFAULT_PAGE);
        let page_size = page_size
            .and_then(|s| u32::try_from(s).ok())
            .filter(|s| (1..=MAX_PAGE_SIZE).contains(s))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self { page, page_size }
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        let offset = u64::from(self.page - 1) * u64::from(self.page_size);
        usize::try_from(offset).unwrap_or(usize::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Sort key for the default listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Created,
}

impl SortKey {
    /// Unrecognized or absent values resolve to [`SortKey::Name`].
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Price => a.price.cmp(&b.price),
            Self::Created => a.created_at.cmp(&b.created_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Unrecognized or absent values resolve to [`SortOrder::Asc`].
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Stable sort; descending flips the comparator rather than the output,
/// so equal keys keep store order either way.
pub fn sort_products(products: &mut [Product], key: SortKey, order: SortOrder) {
    products.sort_by(|a, b| order.apply(key.compare(a, b)));
}

/// Conjunctive product filter.
///
/// The status gate only lifts when `in_stock` is explicitly `false`; absent
/// or `true` keeps results to ACTIVE products. `in_stock == Some(true)`
/// additionally requires stock on hand, `Some(false)` never requires its
/// absence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub query: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub in_stock: Option<bool>,
}

impl SearchCriteria {
    /// Category browsing: ACTIVE, in-stock products of one category
    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            in_stock: Some(true),
            ..Self::default()
        }
    }

    /// Lowercases text criteria once so the predicate can run per product
    /// without allocating for the needles.
    pub fn matcher(&self) -> ProductMatcher<'_> {
        ProductMatcher {
            criteria: self,
            needle: self.query.as_deref().map(str::to_lowercase),
            category: self.category.as_deref().map(str::to_lowercase),
        }
    }
}

impl From<&SearchQuery> for SearchCriteria {
    fn from(query: &SearchQuery) -> Self {
        Self {
            query: query.query.clone(),
            category: query.category.clone(),
            min_price: query.min_price,
            max_price: query.max_price,
            in_stock: query.in_stock,
        }
    }
}

pub struct ProductMatcher<'a> {
    criteria: &'a SearchCriteria,
    needle: Option<String>,
    category: Option<String>,
}

impl ProductMatcher<'_> {
    pub fn matches(&self, product: &Product) -> bool {
        let c = self.criteria;

        if !(product.is_active() || c.in_stock == Some(false)) {
            return false;
        }
        if let Some(needle) = &self.needle {
            if !product.matches_text(needle) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if product.category.to_lowercase() != *category {
                return false;
            }
        }
        if c.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if c.max_price.is_some_and(|max| product.price > max) {
            return false;
        }
        if c.in_stock == Some(true) && !product.is_in_stock() {
            return false;
        }

        true
    }
}

/// A slice of a larger result set
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

/// Cut one page out of `items`. A start index past the end gives an empty
/// page, never an error.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();
    let start = request.offset();

    let items = if start >= total {
        Vec::new()
    } else {
        items
            .into_iter()
            .skip(start)
            .take(request.page_size as usize)
            .collect()
    };

    Page {
        items,
        page: request.page,
        page_size: request.page_size,
        total_count: total as u64,
        total_pages: total_pages(total as u64, request.page_size),
    }
}

/// `ceil(total_count / page_size)`; zero items means zero pages.
pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    let pages = total_count.div_ceil(u64::from(page_size.max(1)));
    u32::try_from(pages).unwrap_or(u32::MAX)
}
