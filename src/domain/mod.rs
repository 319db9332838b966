//! Catalog domain model
pub mod aggregates;
pub mod value_objects;

pub use aggregates::{Category, Product, Specifications, VariantField, Variants};
pub use value_objects::{Price, PriceRange, SortKey};
