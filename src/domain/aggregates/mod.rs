//! Aggregates module
pub mod product;
pub mod category;

pub use product::{Product, Specifications, VariantField, Variants};
pub use category::Category;
