//! Catalog data access
//!
//! The catalog is read once at startup and never mutated afterwards.
//! Products and categories are validated while loading, so everything
//! downstream can treat them as trusted.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};
use validator::Validate;

use crate::domain::{Category, PriceRange, Product};
use crate::{Result, StorefrontError};

/// Related products shown under a product page.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<Category>,
    products: Vec<Product>,
}

#[derive(Clone, Debug)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting invalid products and duplicate identifiers.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Result<Self> {
        {
            let mut seen = HashSet::new();
            for category in &categories {
                if !seen.insert(category.id()) {
                    return Err(StorefrontError::DuplicateCategory(category.id().to_string()));
                }
            }
        }

        let mut by_id = HashMap::with_capacity(products.len());
        for (idx, product) in products.iter().enumerate() {
            product.validate().map_err(|e| StorefrontError::InvalidProduct {
                id: product.id().to_string(),
                reason: e.to_string(),
            })?;
            if by_id.insert(product.id().to_string(), idx).is_some() {
                return Err(StorefrontError::DuplicateProduct(product.id().to_string()));
            }
        }

        debug!(products = products.len(), categories = categories.len(), "catalog built");
        Ok(Self { products, categories, by_id })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.categories, file.products)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        info!(path = %path.display(), products = catalog.products.len(), categories = catalog.categories.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] { &self.products }
    pub fn categories(&self) -> &[Category] { &self.categories }
    pub fn len(&self) -> usize { self.products.len() }
    pub fn is_empty(&self) -> bool { self.products.is_empty() }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).map(|&idx| &self.products[idx])
    }

    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug() == slug)
    }

    /// The category whose display name matches the product's category.
    pub fn category_for_product(&self, product: &Product) -> Option<&Category> {
        self.categories.iter().find(|c| c.contains(product.category()))
    }

    /// Products belonging to the category with this slug, in catalog order.
    pub fn products_in_category(&self, slug: &str) -> Result<Vec<Product>> {
        let category = self.category(slug).ok_or_else(|| StorefrontError::CategoryNotFound(slug.to_string()))?;
        Ok(self.products.iter().filter(|p| category.contains(p.category())).cloned().collect())
    }

    pub fn featured_products(&self) -> Vec<Product> {
        self.products.iter().filter(|p| p.is_featured()).cloned().collect()
    }

    /// Up to `limit` other products from the same category, in catalog order.
    pub fn related_products(&self, product: &Product, limit: usize) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category() == product.category() && p.id() != product.id())
            .take(limit)
            .cloned()
            .collect()
    }
}

/// Lowest and highest price in `products`, `None` when empty.
pub fn price_bounds(products: &[Product]) -> Option<PriceRange> {
    let min = products.iter().map(Product::price).min()?;
    let max = products.iter().map(Product::price).max()?;
    Some(PriceRange { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Price;

    const SAMPLE: &str = include_str!("../../data/catalog.json");

    fn sample() -> Catalog { Catalog::from_json_str(SAMPLE).unwrap() }

    #[test]
    fn test_sample_catalog_loads() {
        let catalog = sample();
        assert_eq!(catalog.categories().len(), 4);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.product("umbrella-stand").unwrap().name(), "Umbrella Stand");
        assert!(catalog.product("missing").is_none());
    }

    #[test]
    fn test_duplicate_product_rejected() {
        let products = vec![Product::new("a", "A", "C", 10u64), Product::new("a", "B", "C", 20u64)];
        let err = Catalog::new(vec![], products).unwrap_err();
        assert!(matches!(err, StorefrontError::DuplicateProduct(id) if id == "a"));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let categories = vec![Category::new("x", "X"), Category::new("x", "Y")];
        assert!(matches!(Catalog::new(categories, vec![]), Err(StorefrontError::DuplicateCategory(_))));
    }

    #[test]
    fn test_original_price_below_price_rejected() {
        let products = vec![Product::new("cheap", "Cheap", "C", 500u64).with_original_price(300u64)];
        let err = Catalog::new(vec![], products).unwrap_err();
        assert!(matches!(err, StorefrontError::InvalidProduct { ref id, .. } if id == "cheap"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Catalog::from_json_str("{\"products\": 3}"), Err(StorefrontError::CatalogParse(_))));
    }

    #[test]
    fn test_products_in_category() {
        let catalog = sample();
        let trolleys = catalog.products_in_category("trolleys").unwrap();
        assert_eq!(trolleys.len(), 2);
        assert!(trolleys.iter().all(|p| p.category() == "Trolleys"));
        assert!(matches!(catalog.products_in_category("garden"), Err(StorefrontError::CategoryNotFound(_))));
    }

    #[test]
    fn test_related_products_exclude_self() {
        let catalog = Catalog::new(
            vec![],
            (0..7).map(|i| Product::new(format!("p{i}"), format!("P{i}"), "Same", 100u64)).collect(),
        )
        .unwrap();
        let current = catalog.product("p0").unwrap();
        let related = catalog.related_products(current, RELATED_PRODUCTS_LIMIT);
        assert_eq!(related.len(), 4);
        assert!(related.iter().all(|p| p.id() != "p0"));
        assert_eq!(related[0].id(), "p1");
    }

    #[test]
    fn test_category_for_product_and_featured() {
        let catalog = sample();
        let rack = catalog.product("spice-rack-3").unwrap();
        assert_eq!(catalog.category_for_product(rack).unwrap().slug(), "kitchen-storage");
        assert!(catalog.featured_products().iter().all(Product::is_featured));
    }

    #[test]
    fn test_price_bounds() {
        assert_eq!(price_bounds(&[]), None);
        let products = vec![Product::new("a", "A", "C", 700u64), Product::new("b", "B", "C", 150u64)];
        assert_eq!(price_bounds(&products), Some(PriceRange { min: Price::new(150), max: Price::new(700) }));
    }
}
