//! Catalog query engine
//!
//! Pure functions over a product slice: text search, conjunctive filtering
//! and stable sorting, plus search suggestions. Nothing here holds state
//! between calls and the input slice is never modified.

pub mod facets;
pub mod filters;
pub mod paginate;
pub mod sorter;
pub mod suggest;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{PriceRange, Product, SortKey, VariantField};

pub use facets::{Facet, Facets, FilterState, FilterUpdate};
pub use filters::ProductFilter;
pub use paginate::{page_window, Page, PageLink, PRODUCTS_PER_PAGE};
pub use sorter::{compare_names, ProductSorter};
pub use suggest::{suggestions, DEFAULT_SUGGESTION_LIMIT};

/// What to look for and how to order it. Every field left empty imposes no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub in_stock_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
}

impl SearchOptions {
    pub fn new() -> Self { Self::default() }

    pub fn query(mut self, query: impl Into<String>) -> Self { self.query = Some(query.into()); self }
    pub fn price_range(mut self, range: PriceRange) -> Self { self.price_range = Some(range); self }
    pub fn in_stock_only(mut self, enabled: bool) -> Self { self.in_stock_only = enabled; self }
    pub fn sort_by(mut self, key: SortKey) -> Self { self.sort_by = Some(key); self }

    pub fn categories<I, S>(mut self, categories: I) -> Self where I: IntoIterator<Item = S>, S: Into<String> {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn variant<I, S>(mut self, field: VariantField, values: I) -> Self where I: IntoIterator<Item = S>, S: Into<String> {
        *self.variant_slot(field) = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn variant_values(&self, field: VariantField) -> &[String] {
        match field {
            VariantField::Tier => &self.tiers,
            VariantField::Color => &self.colors,
            VariantField::Shape => &self.shapes,
            VariantField::Size => &self.sizes,
        }
    }

    pub(crate) fn variant_slot(&mut self, field: VariantField) -> &mut Vec<String> {
        match field {
            VariantField::Tier => &mut self.tiers,
            VariantField::Color => &mut self.colors,
            VariantField::Shape => &mut self.shapes,
            VariantField::Size => &mut self.sizes,
        }
    }

    /// Trimmed, lowercased text query; `None` when blank.
    pub fn normalized_query(&self) -> Option<String> {
        self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()).map(str::to_lowercase)
    }
}

/// Products matching every criterion in `options`, ordered by its sort key.
///
/// Without a sort key the catalog order is kept.
pub fn search_and_filter(products: &[Product], options: &SearchOptions) -> Vec<Product> {
    let filter = ProductFilter::new(options);
    let mut results: Vec<Product> = products.iter().filter(|p| filter.matches(p)).cloned().collect();
    if let Some(key) = options.sort_by {
        ProductSorter::sort(&mut results, key);
    }
    debug!(total = products.len(), matched = results.len(), sort = ?options.sort_by, "catalog query evaluated");
    results
}
