//! Client-side narrowing of the current page.
//!
//! Three independent predicates, combined with AND. An empty term disables its
//! predicate.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::types::Product;

/// Leading decimal number, as read by a lenient float parser
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("valid price regex")
});

/// Which filter input a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Search,
    Brand,
    MaxPrice,
}

impl FilterField {
    pub fn label(self) -> &'static str {
        match self {
            FilterField::Search => "Search",
            FilterField::Brand => "Brand",
            FilterField::MaxPrice => "Max price",
        }
    }
}

/// Active filter terms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filters {
    /// Case-insensitive substring of the product name
    pub search: String,
    /// Case-insensitive exact brand
    pub brand: String,
    /// Inclusive price ceiling, as typed
    pub max_price: String,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.brand.is_empty() && self.max_price.is_empty()
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Search => &self.search,
            FilterField::Brand => &self.brand,
            FilterField::MaxPrice => &self.max_price,
        }
    }

    pub fn set(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Search => self.search = value,
            FilterField::Brand => self.brand = value,
            FilterField::MaxPrice => self.max_price = value,
        }
    }

    /// Whether `product` passes all three predicates
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.matches_brand(product) && self.matches_price(product)
    }

    fn matches_search(&self, product: &Product) -> bool {
        self.search.is_empty()
            || product
                .product
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    fn matches_brand(&self, product: &Product) -> bool {
        if self.brand.is_empty() {
            return true;
        }
        product
            .brand
            .as_deref()
            .is_some_and(|brand| brand.to_lowercase() == self.brand.to_lowercase())
    }

    fn matches_price(&self, product: &Product) -> bool {
        if self.max_price.is_empty() {
            return true;
        }
        // A ceiling that does not parse admits nothing
        parse_price_ceiling(&self.max_price).is_some_and(|ceiling| product.price <= ceiling)
    }
}

/// Read the leading number of `input`, ignoring leading whitespace and any trailing text.
///
/// `"10"`, `" 10.5"`, `"10abc"` and `"Infinity"` all parse; `"abc"` and `""` do not.
pub fn parse_price_ceiling(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    LEADING_NUMBER
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Products of `products` that pass `filters`, in their original order
pub fn visible_products(products: &[Product], filters: &Filters) -> Vec<Product> {
    if filters.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "Widget", 9.99, Some("Acme")),
            Product::new(2, "Gadget", 19.99, Some("Beta")),
        ]
    }

    fn ids(products: &[Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_empty_filters_pass_everything() {
        let products = sample();
        assert_eq!(visible_products(&products, &Filters::default()), products);
    }

    #[test]
    fn test_brand_match_is_case_insensitive_exact() {
        let filters = Filters {
            brand: "acme".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&visible_products(&sample(), &filters)), vec!["1"]);

        let partial = Filters {
            brand: "acm".to_string(),
            ..Default::default()
        };
        assert!(visible_products(&sample(), &partial).is_empty());
    }

    #[test]
    fn test_brand_filter_excludes_products_without_brand() {
        let products = vec![Product::new(3, "Loose stone", 5.0, None)];
        let filters = Filters {
            brand: "Acme".to_string(),
            ..Default::default()
        };
        assert!(visible_products(&products, &filters).is_empty());
    }

    #[test]
    fn test_max_price_is_inclusive_ceiling() {
        let filters = Filters {
            max_price: "10".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&visible_products(&sample(), &filters)), vec!["1"]);

        let exact = Filters {
            max_price: "19.99".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&visible_products(&sample(), &exact)), vec!["1", "2"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filters = Filters {
            search: "DGE".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&visible_products(&sample(), &filters)), vec!["1", "2"]);

        let filters = Filters {
            search: "gad".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&visible_products(&sample(), &filters)), vec!["2"]);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let filters = Filters {
            search: "gadget".to_string(),
            brand: "acme".to_string(),
            max_price: String::new(),
        };
        assert!(visible_products(&sample(), &filters).is_empty());

        let filters = Filters {
            search: "w".to_string(),
            brand: "ACME".to_string(),
            max_price: "100".to_string(),
        };
        assert_eq!(ids(&visible_products(&sample(), &filters)), vec!["1"]);
    }

    #[test]
    fn test_parse_price_ceiling() {
        assert_eq!(parse_price_ceiling("10"), Some(10.0));
        assert_eq!(parse_price_ceiling("  10.5"), Some(10.5));
        assert_eq!(parse_price_ceiling("10abc"), Some(10.0));
        assert_eq!(parse_price_ceiling(".5"), Some(0.5));
        assert_eq!(parse_price_ceiling("-3"), Some(-3.0));
        assert_eq!(parse_price_ceiling("1e3"), Some(1000.0));
        assert_eq!(parse_price_ceiling("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_price_ceiling("-Infinity!"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_price_ceiling("infinity"), None);
        assert_eq!(parse_price_ceiling("abc"), None);
        assert_eq!(parse_price_ceiling(""), None);
    }

    #[test]
    fn test_infinite_ceilings() {
        let unbounded = Filters {
            max_price: "Infinity".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&visible_products(&sample(), &unbounded)), vec!["1", "2"]);

        let below_all = Filters {
            max_price: "-Infinity".to_string(),
            ..Default::default()
        };
        assert!(visible_products(&sample(), &below_all).is_empty());
    }

    #[test]
    fn test_brand_uses_lowercase_comparison() {
        let products = vec![Product::new(4, "Sign", 1.0, Some("straße"))];
        let folded = Filters {
            brand: "STRASSE".to_string(),
            ..Default::default()
        };
        assert!(visible_products(&products, &folded).is_empty());

        let lowered = Filters {
            brand: "STRAßE".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&visible_products(&products, &lowered)), vec!["4"]);
    }

    #[test]
    fn test_unparseable_ceiling_hides_everything() {
        let filters = Filters {
            max_price: "cheap".to_string(),
            ..Default::default()
        };
        assert!(visible_products(&sample(), &filters).is_empty());
    }

    #[test]
    fn test_filters_get_set() {
        let mut filters = Filters::default();
        filters.set(FilterField::Brand, "Acme".to_string());
        assert_eq!(filters.get(FilterField::Brand), "Acme");
        assert!(!filters.is_empty());
        assert_eq!(FilterField::MaxPrice.label(), "Max price");
    }
}
