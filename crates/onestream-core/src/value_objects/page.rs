//! One page of an offset-paginated listing

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Rows matching the filter across all pages
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, page: u32, per_page: u32) -> Self {
        Self {
            items,
            total,
            page,
            per_page,
        }
    }

    /// Number of pages, never less than 1
    pub fn last_page(&self) -> u32 {
        let per_page = i64::from(self.per_page.max(1));
        let pages = (self.total.max(0) + per_page - 1) / per_page;
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    /// 1-based position of the first item, `None` for an empty page
    pub fn from(&self) -> Option<i64> {
        if self.items.is_empty() {
            return None;
        }
        Some(i64::from(self.page.saturating_sub(1)) * i64::from(self.per_page) + 1)
    }

    /// 1-based position of the last item, `None` for an empty page
    pub fn to(&self) -> Option<i64> {
        self.from().map(|from| from + self.items.len() as i64 - 1)
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}
