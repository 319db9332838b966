//! Runtime configuration from the environment (and `.env`, when present).

use std::env;
use std::path::PathBuf;

use crate::whatsapp::DEFAULT_WHATSAPP_NUMBER;
use crate::{Result, StorefrontError};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub catalog_path: PathBuf,
    pub site_base_url: String,
    pub whatsapp_number: String,
    pub brand_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8083,
            catalog_path: PathBuf::from("data/catalog.json"),
            site_base_url: "https://yatanz.com".to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            brand_name: "Yatanz".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the process environment. `main` loads `.env` into it first.
    pub fn from_env() -> Result<Self> {
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        tracing::info!(port = config.port, catalog = %config.catalog_path.display(), "configuration loaded");
        Ok(config)
    }

    /// Builds the config from any key lookup, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| StorefrontError::Config(format!("Invalid PORT '{}': {}", raw, e)))?,
            None => defaults.port,
        };

        let whatsapp_number = lookup("WHATSAPP_NUMBER").unwrap_or(defaults.whatsapp_number);
        if whatsapp_number.is_empty() || !whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(StorefrontError::Config(format!(
                "WHATSAPP_NUMBER must be digits with country code, got '{}'",
                whatsapp_number
            )));
        }

        let site_base_url = lookup("SITE_BASE_URL").unwrap_or(defaults.site_base_url);
        if !site_base_url.starts_with("http://") && !site_base_url.starts_with("https://") {
            return Err(StorefrontError::Config(format!("SITE_BASE_URL must be absolute, got '{}'", site_base_url)));
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            catalog_path: lookup("CATALOG_PATH").map(PathBuf::from).unwrap_or(defaults.catalog_path),
            site_base_url: site_base_url.trim_end_matches('/').to_string(),
            whatsapp_number,
            brand_name: lookup("BRAND_NAME").unwrap_or(defaults.brand_name),
        })
    }

    pub fn bind_addr(&self) -> String { format!("{}:{}", self.host, self.port) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8083);
        assert_eq!(config.bind_addr(), "0.0.0.0:8083");
        assert_eq!(config.whatsapp_number, DEFAULT_WHATSAPP_NUMBER);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("SITE_BASE_URL", "https://shop.example.com/"),
            ("CATALOG_PATH", "/srv/catalog.json"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.site_base_url, "https://shop.example.com");
        assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog.json"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(AppConfig::from_lookup(lookup(&[("PORT", "eighty")])), Err(StorefrontError::Config(_))));
        assert!(matches!(AppConfig::from_lookup(lookup(&[("WHATSAPP_NUMBER", "+91 99")])), Err(StorefrontError::Config(_))));
        assert!(matches!(AppConfig::from_lookup(lookup(&[("SITE_BASE_URL", "yatanz.com")])), Err(StorefrontError::Config(_))));
    }
}
