//! Result ordering for catalog queries
//!
//! All orderings use a stable sort, so products that compare equal keep
//! their relative input order.

use std::cmp::Ordering;

use icu_collator::{options::CollatorOptions, Collator, CollatorBorrowed};
use tracing::warn;

use crate::domain::{Product, SortKey};

thread_local! {
    static ROOT_COLLATOR: Option<CollatorBorrowed<'static>> = Collator::try_new(Default::default(), CollatorOptions::default())
        .map_err(|e| warn!(error = %e, "root collation data unavailable, falling back to case-folded order"))
        .ok();
}

pub struct ProductSorter;

impl ProductSorter {
    pub fn sort(products: &mut [Product], key: SortKey) {
        match key {
            SortKey::Name => products.sort_by(|a, b| compare_names(a.name(), b.name())),
            SortKey::PriceLow => products.sort_by_key(Product::price),
            SortKey::PriceHigh => products.sort_by(|a, b| b.price().cmp(&a.price())),
            SortKey::Featured => products.sort_by(featured_first),
            // No recency data exists yet; featured first, then by name.
            SortKey::Newest => products.sort_by(|a, b| featured_first(a, b).then_with(|| compare_names(a.name(), b.name()))),
        }
    }
}

fn featured_first(a: &Product, b: &Product) -> Ordering {
    b.is_featured().cmp(&a.is_featured())
}

/// Name ordering under the root-locale collation at tertiary strength.
///
/// Accents and case only break ties between otherwise equal names, and on a
/// case-only difference lowercase sorts first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => case_folded(a, b),
    })
}

fn case_folded(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    folded(a)
        .cmp(&folded(b))
        .then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
}
