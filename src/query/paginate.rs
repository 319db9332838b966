//! Result pagination

use serde::Serialize;

pub const PRODUCTS_PER_PAGE: usize = 12;
const MAX_VISIBLE_PAGES: usize = 5;

/// One 1-based page of a result list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T: Clone> Page<T> {
    /// Slices out `page` (clamped to at least 1). Pages past the end are empty.
    pub fn of(items: &[T], page: usize, per_page: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let start = (page - 1).saturating_mul(per_page).min(items.len());
        let end = start.saturating_add(per_page).min(items.len());
        Self {
            items: items[start..end].to_vec(),
            page,
            per_page,
            total_items: items.len(),
            total_pages: items.len().div_ceil(per_page),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Page links for a pager showing at most five numbers.
///
/// Short result sets list every page. Longer ones show the first and last
/// page, the current page with its neighbours, and an ellipsis for each gap.
/// A `current` past either end is treated as the nearest real page.
pub fn page_window(current: usize, total: usize) -> Vec<PageLink> {
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(PageLink::Page).collect();
    }
    let current = current.clamp(1, total);
    let mut links = vec![PageLink::Page(1)];
    if current > 3 {
        links.push(PageLink::Ellipsis);
    }
    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total - 1);
    links.extend((start..=end).map(PageLink::Page));
    if current < total - 2 {
        links.push(PageLink::Ellipsis);
    }
    links.push(PageLink::Page(total));
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageLink::{Ellipsis, Page as P};

    #[test]
    fn test_page_slicing() {
        let items: Vec<u32> = (1..=30).collect();
        let first = Page::of(&items, 1, PRODUCTS_PER_PAGE);
        assert_eq!(first.items.len(), 12);
        assert_eq!(first.total_pages, 3);
        let last = Page::of(&items, 3, PRODUCTS_PER_PAGE);
        assert_eq!(last.items, (25..=30).collect::<Vec<_>>());
        assert!(Page::of(&items, 9, PRODUCTS_PER_PAGE).items.is_empty());
        assert_eq!(Page::of(&items, 0, PRODUCTS_PER_PAGE).page, 1);
        assert_eq!(Page::<u32>::of(&[], 1, PRODUCTS_PER_PAGE).total_pages, 0);
    }

    #[test]
    fn test_short_window_lists_all() {
        assert_eq!(page_window(2, 4), vec![P(1), P(2), P(3), P(4)]);
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn test_long_window_shapes() {
        assert_eq!(page_window(1, 10), vec![P(1), P(2), Ellipsis, P(10)]);
        assert_eq!(page_window(5, 10), vec![P(1), Ellipsis, P(4), P(5), P(6), Ellipsis, P(10)]);
        assert_eq!(page_window(10, 10), vec![P(1), Ellipsis, P(9), P(10)]);
        assert_eq!(page_window(3, 8), vec![P(1), P(2), P(3), P(4), Ellipsis, P(8)]);
    }

    #[test]
    fn test_window_for_page_out_of_range() {
        assert_eq!(page_window(usize::MAX, 11), vec![P(1), Ellipsis, P(10), P(11)]);
        assert_eq!(page_window(0, 11), vec![P(1), P(2), Ellipsis, P(11)]);
        let items: Vec<u32> = (1..=11).collect();
        let page = Page::of(&items, usize::MAX, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 11);
    }
}
