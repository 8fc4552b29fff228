//! Display-string helpers with a small memo for repeated formatting
use crate::cache::KeyedCache;

/// Capitalize a data-file token (`"serbia"` → `"Serbia"`) for display.
#[must_use]
pub fn title_case(token: &str) -> String {
    let mut chars = token.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"1 product"` / `"12 products"` result summaries.
#[must_use]
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 product".to_string()
    } else {
        format!("{count} products")
    }
}

/// Memoized formatting for strings rendered on every grid pass. Cleared
/// together with the query caches when the catalog reloads.
#[derive(Debug, Default)]
pub struct TextCache {
    labels: KeyedCache<String, String>,
    counts: KeyedCache<usize, String>,
}

impl TextCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title_label(&mut self, token: &str) -> String {
        self.labels
            .get_or_insert_with(token.to_string(), || title_case(token))
            .clone()
    }

    pub fn count_label(&mut self, count: usize) -> String {
        self.counts
            .get_or_insert_with(count, || count_label(count))
            .clone()
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.counts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{TextCache, count_label, title_case};

    #[test]
    fn title_case_capitalizes_first_letter_only() {
        assert_eq!(title_case("serbia"), "Serbia");
        assert_eq!(title_case("  china"), "China");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(0), "0 products");
        assert_eq!(count_label(1), "1 product");
        assert_eq!(count_label(12), "12 products");
    }

    #[test]
    fn text_cache_reuses_formatted_labels() {
        let mut cache = TextCache::new();
        assert_eq!(cache.title_label("peru"), "Peru");
        assert_eq!(cache.title_label("peru"), "Peru");
        assert_eq!(cache.count_label(3), "3 products");
        cache.clear();
        assert_eq!(cache.title_label("peru"), "Peru");
    }
}
