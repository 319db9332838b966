//! Filter panel state
//!
//! Listing pages keep a [`FilterState`] per visitor and turn it into
//! [`SearchOptions`] whenever it changes. Updates go through
//! [`FilterUpdate`] so every field is changed with its own type.

use serde::{Deserialize, Serialize};

use crate::catalog::price_bounds;
use crate::domain::{PriceRange, Product, SortKey, VariantField};

use super::SearchOptions;

/// A multi-select dimension of the filter panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Category,
    #[serde(untagged)]
    Variant(VariantField),
}

/// Distinct filterable values present in a product set, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub categories: Vec<String>,
    pub tiers: Vec<String>,
    pub colors: Vec<String>,
    pub shapes: Vec<String>,
    pub sizes: Vec<String>,
    pub price_bounds: Option<PriceRange>,
}

impl Facets {
    pub fn from_products(products: &[Product]) -> Self {
        let variant = |field: VariantField| distinct(products.iter().filter_map(move |p| p.variants().get(field)));
        Self {
            categories: distinct(products.iter().map(Product::category)),
            tiers: variant(VariantField::Tier),
            colors: variant(VariantField::Color),
            shapes: variant(VariantField::Shape),
            sizes: variant(VariantField::Size),
            price_bounds: price_bounds(products),
        }
    }

    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Category => &self.categories,
            Facet::Variant(VariantField::Tier) => &self.tiers,
            Facet::Variant(VariantField::Color) => &self.colors,
            Facet::Variant(VariantField::Shape) => &self.shapes,
            Facet::Variant(VariantField::Size) => &self.sizes,
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if !out.iter().any(|o| o == v) {
            out.push(v.to_string());
        }
    }
    out
}

/// One edit to the filter panel.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FilterUpdate {
    SetValues { facet: Facet, values: Vec<String> },
    Toggle { facet: Facet, value: String },
    SetPriceRange { range: PriceRange },
    SetInStockOnly { enabled: bool },
    ClearAll,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterState {
    categories: Vec<String>,
    price_range: PriceRange,
    tiers: Vec<String>,
    colors: Vec<String>,
    shapes: Vec<String>,
    sizes: Vec<String>,
    in_stock_only: bool,
    /// Full price span of the listing; a range equal to it is not a filter.
    bounds: PriceRange,
}

impl FilterState {
    pub fn new(bounds: PriceRange) -> Self {
        Self {
            categories: vec![], price_range: bounds, tiers: vec![], colors: vec![],
            shapes: vec![], sizes: vec![], in_stock_only: false, bounds,
        }
    }

    /// Cleared state spanning the prices of `products`.
    pub fn for_products(products: &[Product]) -> Self {
        Self::new(price_bounds(products).unwrap_or_default())
    }

    pub fn selected(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Category => &self.categories,
            Facet::Variant(VariantField::Tier) => &self.tiers,
            Facet::Variant(VariantField::Color) => &self.colors,
            Facet::Variant(VariantField::Shape) => &self.shapes,
            Facet::Variant(VariantField::Size) => &self.sizes,
        }
    }

    fn selected_mut(&mut self, facet: Facet) -> &mut Vec<String> {
        match facet {
            Facet::Category => &mut self.categories,
            Facet::Variant(VariantField::Tier) => &mut self.tiers,
            Facet::Variant(VariantField::Color) => &mut self.colors,
            Facet::Variant(VariantField::Shape) => &mut self.shapes,
            Facet::Variant(VariantField::Size) => &mut self.sizes,
        }
    }

    pub fn price_range(&self) -> PriceRange { self.price_range }
    pub fn bounds(&self) -> PriceRange { self.bounds }
    pub fn in_stock_only(&self) -> bool { self.in_stock_only }

    pub fn set_values(&mut self, facet: Facet, values: Vec<String>) { *self.selected_mut(facet) = values; }
    pub fn set_price_range(&mut self, range: PriceRange) { self.price_range = range; }
    pub fn set_in_stock_only(&mut self, enabled: bool) { self.in_stock_only = enabled; }

    /// Selects `value` if it is not selected, otherwise deselects it.
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        let selected = self.selected_mut(facet);
        match selected.iter().position(|v| v == value) {
            Some(idx) => { selected.remove(idx); }
            None => selected.push(value.to_string()),
        }
    }

    pub fn clear_all(&mut self) { *self = Self::new(self.bounds); }

    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::SetValues { facet, values } => self.set_values(facet, values),
            FilterUpdate::Toggle { facet, value } => self.toggle(facet, &value),
            FilterUpdate::SetPriceRange { range } => self.set_price_range(range),
            FilterUpdate::SetInStockOnly { enabled } => self.set_in_stock_only(enabled),
            FilterUpdate::ClearAll => self.clear_all(),
        }
    }

    fn price_narrowed(&self) -> bool { self.price_range != self.bounds }

    /// Badge count: every selected value, plus one each for stock and a narrowed price.
    pub fn active_count(&self) -> usize {
        self.categories.len() + self.tiers.len() + self.colors.len() + self.shapes.len() + self.sizes.len()
            + usize::from(self.in_stock_only)
            + usize::from(self.price_narrowed())
    }

    pub fn to_query(&self, text: Option<&str>, sort: Option<SortKey>) -> SearchOptions {
        SearchOptions {
            query: text.map(str::to_string),
            categories: self.categories.clone(),
            price_range: self.price_narrowed().then_some(self.price_range),
            tiers: self.tiers.clone(),
            colors: self.colors.clone(),
            shapes: self.shapes.clone(),
            sizes: self.sizes.clone(),
            in_stock_only: self.in_stock_only,
            sort_by: sort,
        }
    }
}
