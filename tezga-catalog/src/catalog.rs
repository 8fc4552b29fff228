//! Product store: list ownership and memoized queries
use std::collections::HashMap;

use crate::cache::KeyedCache;
use crate::product::Product;

/// Tag that selects the whole catalog instead of filtering.
pub const ALL_CATEGORY: &str = "all";

/// In-memory product store. Queries are pure functions of the current list;
/// each result is memoized by its argument signature until the list is
/// replaced, which clears every cache and bumps the catalog epoch.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<u32, usize>,
    epoch: u64,
    category_cache: KeyedCache<String, Vec<Product>>,
    search_cache: KeyedCache<String, Vec<Product>>,
    price_cache: KeyedCache<String, Vec<Product>>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly loaded product list. Invalidates every memoized
    /// query and the downstream card cache (via the epoch bump).
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.by_id = products
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.id, idx))
            .collect();
        self.products = products;
        self.epoch = self.epoch.wrapping_add(1);
        self.clear_caches();
    }

    /// Drop memoized query results without touching the product list.
    pub fn clear_caches(&mut self) {
        self.category_cache.clear();
        self.search_cache.clear();
        self.price_cache.clear();
    }

    /// Bumped on every `replace_products`; consumers holding derived state
    /// (e.g. rendered card templates) invalidate when this changes.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn by_id(&self, id: u32) -> Option<&Product> {
        self.by_id.get(&id).map(|&idx| &self.products[idx])
    }

    /// Products whose tag set contains `tag`; `"all"` returns the whole
    /// list in catalog order.
    pub fn filter_by_category(&mut self, tag: &str) -> Vec<Product> {
        let products = &self.products;
        self.category_cache
            .get_or_insert_with(tag.to_string(), || {
                if tag == ALL_CATEGORY {
                    products.clone()
                } else {
                    products.iter().filter(|p| p.has_tag(tag)).cloned().collect()
                }
            })
            .clone()
    }

    /// Products whose parsed price falls within `[min, max]`. Products
    /// without a parseable price are excluded.
    pub fn by_price_range(&mut self, min: f64, max: f64) -> Vec<Product> {
        let products = &self.products;
        self.price_cache
            .get_or_insert_with(format!("{min}-{max}"), || {
                products
                    .iter()
                    .filter(|p| {
                        p.price_value()
                            .is_some_and(|value| value >= min && value <= max)
                    })
                    .cloned()
                    .collect()
            })
            .clone()
    }

    /// Case-insensitive substring search over name, description, country
    /// and category. An empty or whitespace-only query returns the full
    /// list.
    pub fn search(&mut self, text: &str) -> Vec<Product> {
        let needle = text.trim().to_lowercase();
        let products = &self.products;
        self.search_cache
            .get_or_insert_with(needle.clone(), || {
                if needle.is_empty() {
                    products.clone()
                } else {
                    products
                        .iter()
                        .filter(|p| {
                            p.name.to_lowercase().contains(&needle)
                                || p.description.to_lowercase().contains(&needle)
                                || p.country.to_lowercase().contains(&needle)
                                || p.category.to_lowercase().contains(&needle)
                        })
                        .cloned()
                        .collect()
                }
            })
            .clone()
    }
}
