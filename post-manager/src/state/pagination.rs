//! Controlled pagination: the owner keeps `total`/`skip`/`limit` and
//! receives new values through [`PaginationSetters`].

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZES: [u64; 3] = [10, 20, 30];

pub trait PaginationSetters {
    fn set_skip(&mut self, skip: u64);
    fn set_limit(&mut self, limit: u64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

impl Pagination {
    pub fn new(total: u64, skip: u64, limit: u64) -> Self {
        Self { total, skip, limit }
    }

    pub fn previous_disabled(&self) -> bool {
        self.skip == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.skip.saturating_add(self.limit) >= self.total
    }

    pub fn previous<S: PaginationSetters + ?Sized>(&self, setters: &mut S) {
        if self.previous_disabled() {
            return;
        }
        setters.set_skip(self.skip.saturating_sub(self.limit));
    }

    pub fn next<S: PaginationSetters + ?Sized>(&self, setters: &mut S) {
        if self.next_disabled() {
            return;
        }
        setters.set_skip(self.skip + self.limit);
    }

    /// Sets the page size as-is. `skip` is left for the owner to adjust.
    pub fn change_page_size<S: PaginationSetters + ?Sized>(&self, limit: u64, setters: &mut S) {
        setters.set_limit(limit);
    }

    /// Next entry of [`PAGE_SIZES`] after the current limit, wrapping.
    pub fn next_page_size(&self) -> u64 {
        PAGE_SIZES
            .iter()
            .copied()
            .find(|size| *size > self.limit)
            .unwrap_or(PAGE_SIZES[0])
    }

    /// 1-based page number containing `skip`.
    pub fn current_page(&self) -> u64 {
        if self.limit == 0 {
            return 1;
        }
        self.skip / self.limit + 1
    }

    pub fn page_count(&self) -> u64 {
        if self.limit == 0 || self.total == 0 {
            return 1;
        }
        self.total.div_ceil(self.limit)
    }
}
