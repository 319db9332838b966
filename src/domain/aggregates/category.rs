//! Category Aggregate

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// URL slug, e.g. `kitchen-storage`.
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), description: String::new(), image: String::new() }
    }
    pub fn with_description(mut self, description: impl Into<String>) -> Self { self.description = description.into(); self }
    pub fn with_image(mut self, image: impl Into<String>) -> Self { self.image = image.into(); self }

    pub fn id(&self) -> &str { &self.id }
    pub fn slug(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn description(&self) -> &str { &self.description }
    pub fn image(&self) -> &str { &self.image }

    /// Products refer to categories by display name.
    pub fn contains(&self, product_category: &str) -> bool { self.name == product_category }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_category_matches_by_name() {
        let c = Category::new("kitchen-storage", "Kitchen Storage").with_description("Racks and jars");
        assert_eq!(c.slug(), "kitchen-storage");
        assert!(c.contains("Kitchen Storage"));
        assert!(!c.contains("kitchen-storage"));
    }
}
