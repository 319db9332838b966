//! Sitemap generation

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::catalog::Catalog;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency { Weekly, Monthly }

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self { Self::Weekly => "weekly", Self::Monthly => "monthly" }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

const STATIC_PAGES: [(&str, ChangeFrequency, f32); 4] = [
    ("", ChangeFrequency::Weekly, 1.0),
    ("/about", ChangeFrequency::Monthly, 0.8),
    ("/contact", ChangeFrequency::Monthly, 0.8),
    ("/search", ChangeFrequency::Monthly, 0.7),
];

/// Static pages, then every category page, then every product page.
pub fn entries(base_url: &str, catalog: &Catalog, last_modified: DateTime<Utc>) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let entry = |path: String, change_frequency, priority| SitemapEntry {
        url: format!("{base}{path}"),
        last_modified,
        change_frequency,
        priority,
    };

    let statics = STATIC_PAGES.iter().map(|&(path, freq, prio)| entry(path.to_string(), freq, prio));
    let categories = catalog
        .categories()
        .iter()
        .map(|c| entry(format!("/category/{}", c.id()), ChangeFrequency::Weekly, 0.9));
    let products = catalog
        .products()
        .iter()
        .map(|p| entry(format!("/product/{}", p.id()), ChangeFrequency::Weekly, 0.8));

    statics.chain(categories).chain(products).collect()
}

/// Renders entries as a sitemaps.org `urlset` document.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for e in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&e.url)));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", e.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)));
        xml.push_str(&format!("    <changefreq>{}</changefreq>\n", e.change_frequency.as_str()));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", e.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
