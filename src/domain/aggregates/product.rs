//! Product Aggregate

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::value_objects::Price;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_pricing"))]
pub struct Product {
    #[validate(length(min = 1))]
    id: String,
    #[validate(length(min = 1))]
    name: String,
    #[serde(default)]
    description: String,
    category: String,
    #[serde(default)]
    subcategory: String,
    price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    original_price: Option<Price>,
    in_stock: bool,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    variants: Variants,
    #[serde(default)]
    specifications: Specifications,
    #[serde(default)]
    images: Vec<String>,
}

/// Optional attribute dimensions a product may be offered in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variants {
    #[serde(default, skip_serializing_if = "Option::is_none")] pub tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")] pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")] pub shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")] pub size: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantField { Tier, Color, Shape, Size }

impl VariantField {
    pub const ALL: [VariantField; 4] = [VariantField::Tier, VariantField::Color, VariantField::Shape, VariantField::Size];
}

impl Variants {
    pub fn get(&self, field: VariantField) -> Option<&str> {
        match field {
            VariantField::Tier => self.tier.as_deref(),
            VariantField::Color => self.color.as_deref(),
            VariantField::Shape => self.shape.as_deref(),
            VariantField::Size => self.size.as_deref(),
        }
    }

    fn slot(&mut self, field: VariantField) -> &mut Option<String> {
        match field {
            VariantField::Tier => &mut self.tier,
            VariantField::Color => &mut self.color,
            VariantField::Shape => &mut self.shape,
            VariantField::Size => &mut self.size,
        }
    }

    /// Populated values in tier, color, shape, size order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        VariantField::ALL.into_iter().filter_map(move |f| self.get(f))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specifications {
    #[serde(default, skip_serializing_if = "Option::is_none")] pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")] pub dimensions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")] pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")] pub features: Option<Vec<String>>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            id: id.into(), name: name.into(), description: String::new(), category: category.into(),
            subcategory: String::new(), price: price.into(), original_price: None, in_stock: true,
            featured: false, variants: Variants::default(), specifications: Specifications::default(), images: vec![],
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self { self.description = description.into(); self }
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self { self.subcategory = subcategory.into(); self }
    pub fn with_original_price(mut self, original: impl Into<Price>) -> Self { self.original_price = Some(original.into()); self }
    pub fn with_stock(mut self, in_stock: bool) -> Self { self.in_stock = in_stock; self }
    pub fn with_featured(mut self, featured: bool) -> Self { self.featured = featured; self }
    pub fn with_images(mut self, images: Vec<String>) -> Self { self.images = images; self }
    pub fn with_specifications(mut self, specs: Specifications) -> Self { self.specifications = specs; self }
    pub fn with_variant(mut self, field: VariantField, value: impl Into<String>) -> Self {
        *self.variants.slot(field) = Some(value.into());
        self
    }
    pub fn with_features<I, S>(mut self, features: I) -> Self where I: IntoIterator<Item = S>, S: Into<String> {
        self.specifications.features = Some(features.into_iter().map(Into::into).collect());
        self
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn description(&self) -> &str { &self.description }
    pub fn category(&self) -> &str { &self.category }
    pub fn subcategory(&self) -> &str { &self.subcategory }
    pub fn price(&self) -> Price { self.price }
    pub fn original_price(&self) -> Option<Price> { self.original_price }
    pub fn is_in_stock(&self) -> bool { self.in_stock }
    pub fn is_featured(&self) -> bool { self.featured }
    pub fn variants(&self) -> &Variants { &self.variants }
    pub fn specifications(&self) -> &Specifications { &self.specifications }
    pub fn images(&self) -> &[String] { &self.images }
    pub fn primary_image(&self) -> Option<&str> { self.images.first().map(String::as_str) }
    pub fn features(&self) -> &[String] { self.specifications.features.as_deref().unwrap_or(&[]) }

    /// Amount saved against the original price, zero when there is none.
    pub fn savings(&self) -> Price {
        self.original_price.map(|o| o.saturating_sub(self.price)).unwrap_or_default()
    }

    /// Discount as a whole percentage of the original price, rounded half up.
    pub fn discount_percentage(&self) -> u64 {
        match self.original_price {
            Some(original) if original.value() > 0 => {
                let (saved, original) = (u128::from(self.savings().value()), u128::from(original.value()));
                // savings never exceed the original price, so this is at most 100
                ((saved * 100 + original / 2) / original) as u64
            }
            _ => 0,
        }
    }
}

fn validate_pricing(product: &Product) -> Result<(), ValidationError> {
    match product.original_price {
        Some(original) if original < product.price => {
            let mut err = ValidationError::new("original_price_below_price");
            err.message = Some(format!("original price {} is below price {}", original, product.price).into());
            Err(err)
        }
        _ => Ok(()),
    }
}
