//! Yatanz Storefront
//!
//! Catalog browsing for a home-goods retailer, with ordering handed off to WhatsApp.
//!
//! ## Features
//! - Immutable product catalog loaded once at startup
//! - Text search, faceted filtering and sorting
//! - Search suggestions and pagination
//! - WhatsApp order links
//! - SEO metadata, structured data and sitemap

pub mod catalog;
pub mod config;
pub mod domain;
pub mod query;
pub mod seo;
pub mod sitemap;
pub mod web;
pub mod whatsapp;

use thiserror::Error;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use domain::{Category, Price, PriceRange, Product, SortKey, VariantField};
pub use query::{search_and_filter, suggestions, SearchOptions};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read catalog: {0}")]
    CatalogIo(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("Invalid product '{id}': {reason}")]
    InvalidProduct { id: String, reason: String },

    #[error("Duplicate product id '{0}'")]
    DuplicateProduct(String),

    #[error("Duplicate category id '{0}'")]
    DuplicateCategory(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
