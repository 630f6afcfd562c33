//! Page arithmetic for published post listings.
//!
//! Pages are 1-based. The last page absorbs up to `orphans` trailing items so
//! a listing never ends with a near-empty page, and user supplied page tokens
//! never produce an error: junk falls back to the first page, out of range
//! numbers to the last one.

use super::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PaginationConfig {
    pub(crate) per_page: u64,
    pub(crate) orphans: u64,
}

impl PaginationConfig {
    pub(crate) const DEFAULT_PER_PAGE: u64 = 5;
    pub(crate) const DEFAULT_ORPHANS: u64 = 2;

    pub(crate) fn new(per_page: u64, orphans: u64) -> Result<Self, DomainError> {
        if per_page == 0 {
            return Err(DomainError::Validation {
                field: "per_page",
                message: "must be > 0",
            });
        }
        Ok(Self { per_page, orphans })
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: Self::DEFAULT_PER_PAGE,
            orphans: Self::DEFAULT_ORPHANS,
        }
    }
}

/// What the caller asked for, before it is checked against the page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageRequest {
    /// Absent, empty or not an integer.
    NotAnInteger,
    /// Zero or negative.
    BelowRange,
    /// Positive; may still exceed the page count.
    Number(u64),
}

impl PageRequest {
    pub(crate) fn parse(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return Self::NotAnInteger;
        };

        let token = token.trim();
        let (negative, digits) = match token.as_bytes().first() {
            Some(b'-') => (true, &token[1..]),
            Some(b'+') => (false, &token[1..]),
            _ => (false, token),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Self::NotAnInteger;
        }
        if negative {
            return Self::BelowRange;
        }

        match digits.parse::<u64>() {
            Ok(0) => Self::BelowRange,
            Ok(number) => Self::Number(number),
            // only digits here, so the parse failed on overflow
            Err(_) => Self::Number(u64::MAX),
        }
    }
}

/// Slice of the ordered result set backing one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageWindow {
    pub(crate) number: u64,
    pub(crate) offset: u64,
    pub(crate) limit: u64,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Paginator {
    count: u64,
    config: PaginationConfig,
}

impl Paginator {
    pub(crate) fn new(count: u64, config: PaginationConfig) -> Self {
        Self { count, config }
    }

    /// Always at least 1: an empty listing still has an (empty) first page.
    pub(crate) fn num_pages(&self) -> u64 {
        let hits = self.count.saturating_sub(self.config.orphans).max(1);
        hits.div_ceil(self.config.per_page)
    }

    pub(crate) fn resolve(&self, request: PageRequest) -> u64 {
        let num_pages = self.num_pages();
        match request {
            PageRequest::NotAnInteger => 1,
            PageRequest::BelowRange => num_pages,
            PageRequest::Number(number) if number > num_pages => num_pages,
            PageRequest::Number(number) => number,
        }
    }

    /// `number` must come from [`Paginator::resolve`].
    pub(crate) fn window(&self, number: u64) -> PageWindow {
        let bottom = (number - 1).saturating_mul(self.config.per_page);
        let mut top = bottom.saturating_add(self.config.per_page);
        if top.saturating_add(self.config.orphans) >= self.count {
            top = self.count;
        }

        PageWindow {
            number,
            offset: bottom,
            limit: top.saturating_sub(bottom),
        }
    }

    pub(crate) fn window_for(&self, token: Option<&str>) -> PageWindow {
        self.window(self.resolve(PageRequest::parse(token)))
    }

    pub(crate) fn page<T>(&self, window: PageWindow, items: Vec<T>) -> Page<T> {
        Page {
            items,
            number: window.number,
            num_pages: self.num_pages(),
            total: self.count,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Page<T> {
    pub(crate) items: Vec<T>,
    pub(crate) number: u64,
    pub(crate) num_pages: u64,
    pub(crate) total: u64,
}

impl<T> Page<T> {
    pub(crate) fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub(crate) fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub(crate) fn previous_page_number(&self) -> Option<u64> {
        self.has_previous().then(|| self.number - 1)
    }

    pub(crate) fn next_page_number(&self) -> Option<u64> {
        self.has_next().then(|| self.number + 1)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
