//! Page metadata and schema.org structured data

use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::{Category, Product};

const TAGLINE: &str = "Chaos to Class";
const SITE_KEYWORDS: &str = "home organization, storage solutions";
const OG_IMAGE_SIZE: u32 = 600;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub images: Vec<OgImage>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Builds metadata for one storefront brand.
#[derive(Clone, Debug)]
pub struct Seo {
    brand: String,
}

impl Seo {
    pub fn new(brand: impl Into<String>) -> Self { Self { brand: brand.into() } }

    pub fn product_metadata(&self, product: &Product) -> PageMetadata {
        let title = format!("{} - {}: {}", product.name(), self.brand, TAGLINE);
        let stock = if product.is_in_stock() { "In Stock" } else { "Out of Stock" };
        let description = format!("{} Price: {}. {}.", product.description(), product.price(), stock);
        let keywords = format!(
            "{}, {}, {}, {}, {}",
            product.name(),
            product.category(),
            product.subcategory(),
            SITE_KEYWORDS,
            self.brand.to_lowercase()
        );
        let image = product.primary_image().map(str::to_string);

        PageMetadata {
            title: title.clone(),
            description: Some(description.clone()),
            keywords: Some(keywords),
            open_graph: Some(OpenGraph {
                title: title.clone(),
                description: description.clone(),
                images: image
                    .iter()
                    .map(|url| OgImage { url: url.clone(), width: OG_IMAGE_SIZE, height: OG_IMAGE_SIZE, alt: product.name().to_string() })
                    .collect(),
                kind: "website".to_string(),
            }),
            twitter: Some(TwitterCard {
                card: "summary_large_image".to_string(),
                title,
                description,
                images: image.into_iter().collect(),
            }),
        }
    }

    /// Metadata for a category page; `None` renders the not-found title.
    pub fn category_metadata(&self, category: Option<&Category>) -> PageMetadata {
        let Some(category) = category else {
            return PageMetadata {
                title: format!("Category Not Found - {}", self.brand),
                description: None,
                keywords: None,
                open_graph: None,
                twitter: None,
            };
        };
        PageMetadata {
            title: format!("{} - {}: {}", category.name(), self.brand, TAGLINE),
            description: Some(format!(
                "Shop {} at {}. {}",
                category.name().to_lowercase(),
                self.brand,
                category.description()
            )),
            keywords: Some(format!("{}, {}, {}", category.name().to_lowercase(), SITE_KEYWORDS, self.brand.to_lowercase())),
            open_graph: None,
            twitter: None,
        }
    }

    /// schema.org `Product` JSON-LD.
    pub fn product_structured_data(&self, product: &Product) -> Value {
        let availability = if product.is_in_stock() {
            "https://schema.org/InStock"
        } else {
            "https://schema.org/OutOfStock"
        };
        json!({
            "@context": "https://schema.org",
            "@type": "Product",
            "name": product.name(),
            "description": product.description(),
            "image": product.images(),
            "brand": { "@type": "Brand", "name": self.brand },
            "offers": {
                "@type": "Offer",
                "price": product.price().value(),
                "priceCurrency": "INR",
                "availability": availability,
                "seller": { "@type": "Organization", "name": self.brand },
            },
            "category": product.category(),
            "sku": product.id(),
        })
    }
}
