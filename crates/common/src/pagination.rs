//! Page-numbered pagination over ordered result sets

use serde::Serialize;

/// Fixed page size for job listings
pub const PER_PAGE: u32 = 50;

const LEFT_EDGE: u32 = 2;
const LEFT_CURRENT: u32 = 2;
const RIGHT_CURRENT: u32 = 4;
const RIGHT_EDGE: u32 = 2;

/// A single window over an ordered result set plus the metadata needed to
/// navigate to neighbouring windows.
///
/// An out-of-range page is not an error: it simply carries no items and
/// reports `has_next() == false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
}

/// Rendering hint for one entry of the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: u32,
    pub is_current: bool,
    pub is_gap: bool,
}

/// Clamp a requested page number to the first page.
pub fn normalize_page(page: u32) -> u32 {
    page.max(1)
}

/// Row offset of the first item on `page`.
pub fn offset_for(page: u32, per_page: u32) -> i64 {
    (i64::from(normalize_page(page)) - 1) * i64::from(per_page)
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, per_page: u32, total: i64) -> Self {
        Self {
            items,
            page: normalize_page(page),
            per_page,
            total: total.max(0),
        }
    }

    /// A page over an empty result set
    pub fn empty(page: u32) -> Self {
        Self::new(Vec::new(), page, PER_PAGE, 0)
    }

    /// Total number of pages
    pub fn pages(&self) -> u32 {
        if self.per_page == 0 || self.total == 0 {
            return 0;
        }
        let per_page = i64::from(self.per_page);
        let pages = (self.total + per_page - 1) / per_page;
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages()
    }

    pub fn prev_num(&self) -> Option<u32> {
        self.has_prev().then(|| self.page - 1)
    }

    pub fn next_num(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Page numbers to show in a pagination strip, `None` marking a gap.
    ///
    /// Shows the first and last two pages plus a window of two pages before
    /// and four after the current one.
    pub fn iter_pages(&self) -> Vec<Option<u32>> {
        let mut out = Vec::new();
        let pages_end = self.pages().saturating_add(1);
        if pages_end == 1 {
            return out;
        }

        let left_end = (1 + LEFT_EDGE).min(pages_end);
        out.extend((1..left_end).map(Some));
        if left_end == pages_end {
            return out;
        }

        // Past-the-end pages window around the last page
        let current = self.page.min(self.pages());
        let mid_start = left_end.max(current.saturating_sub(LEFT_CURRENT));
        let mid_end = current.saturating_add(RIGHT_CURRENT + 1).min(pages_end);
        if mid_start > left_end {
            out.push(None);
        }
        out.extend((mid_start..mid_end).map(Some));
        if mid_end == pages_end {
            return out;
        }

        let right_start = mid_end.max(pages_end.saturating_sub(RIGHT_EDGE));
        if right_start > mid_end {
            out.push(None);
        }
        out.extend((right_start..pages_end).map(Some));
        out
    }

    /// `iter_pages` flattened into template-friendly links
    pub fn links(&self) -> Vec<PageLink> {
        self.iter_pages()
            .into_iter()
            .map(|entry| match entry {
                Some(number) => PageLink {
                    number,
                    is_current: number == self.page,
                    is_gap: false,
                },
                None => PageLink {
                    number: 0,
                    is_current: false,
                    is_gap: true,
                },
            })
            .collect()
    }

}
