use crate::constants::MAX_PAGE_BUTTONS;
use serde::Serialize;

/// One page of a result list. Page numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T: Clone> Page<T> {
    /// Slice `items` into page `page` of `per_page`.
    ///
    /// Pages past the end clamp to the last page; page 0 reads as page 1.
    /// An empty list still has one (empty) page.
    pub fn of(items: &[T], page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = items.len().div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);

        let start = (page - 1) * per_page;
        let end = (start + per_page).min(items.len());

        Page {
            items: items[start.min(end)..end].to_vec(),
            page,
            total_pages,
            total_items: items.len(),
        }
    }
}

/// An entry in the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageLink {
    Number(usize),
    Ellipsis,
}

/// Page buttons to show: every page when there are few, otherwise the first
/// page, the pages around `current`, the last page, and ellipses for gaps.
pub fn page_numbers(current: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages <= MAX_PAGE_BUTTONS {
        return (1..=total_pages).map(PageLink::Number).collect();
    }

    let mut links = vec![PageLink::Number(1)];

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);

    if start > 2 {
        links.push(PageLink::Ellipsis);
    }
    links.extend((start..=end).map(PageLink::Number));
    if end < total_pages - 1 {
        links.push(PageLink::Ellipsis);
    }

    links.push(PageLink::Number(total_pages));
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Ellipsis, Number};

    #[test]
    fn test_page_slicing() {
        let items: Vec<u32> = (1..=45).collect();

        let page = Page::of(&items, 1, 20);
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.items[0], 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 45);

        let page = Page::of(&items, 3, 20);
        assert_eq!(page.items, vec![41, 42, 43, 44, 45]);
    }

    #[test]
    fn test_page_out_of_range_clamps() {
        let items: Vec<u32> = (1..=45).collect();

        let page = Page::of(&items, 9, 20);
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 5);

        let page = Page::of(&items, 0, 20);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_empty_list_has_one_page() {
        let items: Vec<u32> = vec![];
        let page = Page::of(&items, 1, 20);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_few_pages_shows_all() {
        assert_eq!(page_numbers(1, 1), vec![Number(1)]);
        assert_eq!(
            page_numbers(2, 5),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5)]
        );
        assert!(page_numbers(1, 0).is_empty());
    }

    #[test]
    fn test_many_pages_collapse() {
        assert_eq!(
            page_numbers(1, 10),
            vec![Number(1), Number(2), Ellipsis, Number(10)]
        );
        assert_eq!(
            page_numbers(5, 10),
            vec![
                Number(1),
                Ellipsis,
                Number(4),
                Number(5),
                Number(6),
                Ellipsis,
                Number(10)
            ]
        );
        assert_eq!(
            page_numbers(10, 10),
            vec![Number(1), Ellipsis, Number(9), Number(10)]
        );
        assert_eq!(
            page_numbers(3, 6),
            vec![Number(1), Number(2), Number(3), Number(4), Ellipsis, Number(6)]
        );
    }
}
