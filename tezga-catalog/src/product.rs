//! Product data model and document parsing
use serde::{Deserialize, Serialize};

/// A single item in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Display price as authored in the data files, e.g. `"$24.99"`
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub category: String,
    /// Ordered gallery images; the first one is the card image
    #[serde(default)]
    pub images: Vec<String>,
    /// Filter tags, matched by `Catalog::filter_by_category`
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// First gallery image, used as the card image and card-cache key.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Parse the display price into a numeric value for range queries.
    ///
    /// Strips everything except digits, `.` and `-` before parsing, so
    /// `"$24.99"` and `"1 200 RSD"` both resolve. Returns `None` when
    /// nothing numeric remains.
    #[must_use]
    pub fn price_value(&self) -> Option<f64> {
        let numeric: String = self
            .price
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        numeric.parse::<f64>().ok()
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Wire shape of the combined fallback document: `{"products": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombinedDoc {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A product document is either a bare array (per-country files) or the
/// combined `{"products": [...]}` fallback shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ProductDoc {
    List(Vec<Product>),
    Combined(CombinedDoc),
}

/// Parse one product document, accepting both wire shapes.
///
/// # Errors
///
/// Returns an error if the JSON is neither a product array nor a combined
/// document.
pub fn parse_products(json: &str) -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str::<ProductDoc>(json).map(|doc| match doc {
        ProductDoc::List(products) => products,
        ProductDoc::Combined(combined) => combined.products,
    })
}

/// Lenient variant of [`parse_products`] for untrusted callers: a document of
/// the wrong shape is coerced to an empty list with a logged error instead of
/// surfacing the parse failure.
#[must_use]
pub fn parse_products_lenient(source: &str, json: &str) -> Vec<Product> {
    match parse_products(json) {
        Ok(products) => products,
        Err(e) => {
            log::error!("invalid product document from {source}: {e}");
            Vec::new()
        }
    }
}

/// Merge per-country lists into one catalog list, preserving order.
/// A later entry reusing an already-seen id is skipped and logged.
#[must_use]
pub fn merge_products(lists: Vec<Vec<Product>>) -> Vec<Product> {
    let mut merged: Vec<Product> = Vec::new();
    for list in lists {
        for product in list {
            if merged.iter().any(|p| p.id == product.id) {
                log::warn!(
                    "skipping duplicate product id {} ({})",
                    product.id,
                    product.name
                );
                continue;
            }
            merged.push(product);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::{Product, merge_products, parse_products, parse_products_lenient};

    fn product(id: u32, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: String::new(),
            price: String::new(),
            country: String::new(),
            category: String::new(),
            images: Vec::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn parses_bare_array_documents() {
        let json = r#"[{"id": 1, "name": "Opanci"}]"#;
        let products = parse_products(json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].name, "Opanci");
    }

    #[test]
    fn parses_combined_fallback_documents() {
        let json = r#"{"products": [{"id": 7, "name": "Teapot"}, {"id": 8, "name": "Fan"}]}"#;
        let products = parse_products(json).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].id, 8);
    }

    #[test]
    fn lenient_parse_coerces_bad_shapes_to_empty() {
        assert!(parse_products_lenient("test", r#"{"cart": []}"#).is_empty());
        assert!(parse_products_lenient("test", "not json").is_empty());
        assert!(parse_products_lenient("test", "42").is_empty());
    }

    #[test]
    fn merge_preserves_order_and_skips_duplicate_ids() {
        let merged = merge_products(vec![
            vec![product(1, "a"), product(2, "b")],
            vec![product(2, "dupe"), product(3, "c")],
        ]);
        let ids: Vec<u32> = merged.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(merged[1].name, "b");
    }

    #[test]
    fn price_value_strips_currency_markers() {
        let mut p = product(1, "a");
        p.price = "$24.99".to_string();
        assert_eq!(p.price_value(), Some(24.99));
        p.price = "1 200 RSD".to_string();
        assert_eq!(p.price_value(), Some(1200.0));
        p.price = "call us".to_string();
        assert_eq!(p.price_value(), None);
    }
}
