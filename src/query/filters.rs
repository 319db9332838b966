//! Predicate filtering for catalog queries
//!
//! Every populated criterion must hold (AND semantics). Empty criteria are skipped.

use crate::domain::{Product, VariantField};

use super::SearchOptions;

/// Evaluates a [`SearchOptions`] against individual products.
pub struct ProductFilter<'a> {
    options: &'a SearchOptions,
    needle: Option<String>,
}

impl<'a> ProductFilter<'a> {
    pub fn new(options: &'a SearchOptions) -> Self {
        Self { options, needle: options.normalized_query() }
    }

    /// Checks if a product satisfies all criteria
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_text(product)
            && self.matches_category(product)
            && self.matches_price(product)
            && VariantField::ALL.into_iter().all(|field| self.matches_variant(product, field))
            && self.matches_stock(product)
    }

    /// Substring match over name, description, category, subcategory and features
    fn matches_text(&self, product: &Product) -> bool {
        let Some(needle) = self.needle.as_deref() else { return true };
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
        contains(product.name())
            || contains(product.description())
            || contains(product.category())
            || contains(product.subcategory())
            || product.features().iter().any(|f| contains(f))
    }

    fn matches_category(&self, product: &Product) -> bool {
        let categories = &self.options.categories;
        categories.is_empty() || categories.iter().any(|c| c == product.category())
    }

    fn matches_price(&self, product: &Product) -> bool {
        self.options.price_range.map_or(true, |range| range.contains(product.price()))
    }

    /// Absent variant value never matches a non-empty filter
    fn matches_variant(&self, product: &Product, field: VariantField) -> bool {
        let wanted = self.options.variant_values(field);
        if wanted.is_empty() {
            return true;
        }
        match product.variants().get(field) {
            Some(value) => wanted.iter().any(|w| w == value),
            None => false,
        }
    }

    fn matches_stock(&self, product: &Product) -> bool {
        !self.options.in_stock_only || product.is_in_stock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceRange;

    #[test]
    fn test_text_matches_each_field() {
        let product = Product::new("p", "Printer Stand", "Accessories", 1499u64)
            .with_description("Desk-side shelf")
            .with_subcategory("Office")
            .with_features(["Cable cut-out"]);
        for query in ["printer", "DESK", "accessor", "office", "cable"] {
            let options = SearchOptions::new().query(query);
            assert!(ProductFilter::new(&options).matches(&product), "query {query}");
        }
        let options = SearchOptions::new().query("kitchen");
        assert!(!ProductFilter::new(&options).matches(&product));
    }

    #[test]
    fn test_category_membership_is_exact() {
        let product = Product::new("p", "Jar", "Kitchen Storage", 100u64);
        let options = SearchOptions::new().categories(["kitchen storage"]);
        assert!(!ProductFilter::new(&options).matches(&product));
        let options = SearchOptions::new().categories(["Trolleys", "Kitchen Storage"]);
        assert!(ProductFilter::new(&options).matches(&product));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let product = Product::new("p", "Jar", "C", 1500u64);
        let options = SearchOptions::new().price_range(PriceRange::new(2000u64, 1000u64));
        assert!(!ProductFilter::new(&options).matches(&product));
    }

    #[test]
    fn test_empty_variant_set_is_no_constraint() {
        let product = Product::new("p", "Jar", "C", 10u64);
        let options = SearchOptions::new().variant(VariantField::Size, Vec::<String>::new());
        assert!(ProductFilter::new(&options).matches(&product));
    }
}
