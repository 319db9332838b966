//! Search box suggestions

use std::collections::HashSet;

use crate::domain::Product;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Product, category and subcategory names containing `query`, case-insensitively.
///
/// Each distinct string appears once, in the order it was first seen, and at
/// most `limit` are returned. A blank query yields nothing.
pub fn suggestions(products: &[Product], query: &str, limit: usize) -> Vec<String> {
    if query.trim().is_empty() || limit == 0 {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    let candidates = products.iter().flat_map(|p| [p.name(), p.category(), p.subcategory()]);
    for candidate in candidates {
        if !candidate.to_lowercase().contains(&needle) || !seen.insert(candidate) {
            continue;
        }
        out.push(candidate.to_string());
        if out.len() == limit {
            break;
        }
    }
    out
}
