//! Page slicing and the numbered page window rendered under listings.

use serde::{Serialize, Serializer};

/// Number of entry cards per listing page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 9;

/// Window width up to which every page number is shown.
const FULL_WINDOW_PAGES: usize = 7;

/// One control in the page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageItem::Page(page) => serializer.serialize_u64(*page as u64),
            PageItem::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Computes the page numbers and ellipses to render for `current` out of
/// `total` pages.
///
/// With seven pages or fewer all of them are listed. Otherwise the first and
/// last page frame a five-page window around `current`, widened at either
/// edge. `current` is clamped into `1..=total`.
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    if total <= FULL_WINDOW_PAGES {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(2).max(2);
    let mut end = (current + 2).min(total - 1);

    if start <= 2 {
        end = 6;
    }
    if end >= total - 1 {
        start = total - 5;
    }

    let mut window = Vec::with_capacity(end - start + 5);
    window.push(PageItem::Page(1));
    if current > 3 {
        window.push(PageItem::Ellipsis);
    }
    window.extend((start..=end).map(PageItem::Page));
    if current + 2 < total {
        window.push(PageItem::Ellipsis);
    }
    window.push(PageItem::Page(total));
    window
}

/// One page of items together with the controls to reach the others.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub window: Vec<PageItem>,
}

impl<T> Paginated<T> {
    /// Slices `items` in memory. The requested page is clamped to the
    /// available range; an empty input yields a single empty page.
    pub fn from_items(items: Vec<T>, page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_items = items.len();
        let total_pages = total_items.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);

        let items = items
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Self {
            items,
            page,
            total_pages,
            total_items,
            has_previous: page > 1,
            has_next: page < total_pages,
            window: page_window(page, total_pages),
        }
    }

    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            has_previous: self.has_previous,
            has_next: self.has_next,
            window: self.window,
        }
    }
}
