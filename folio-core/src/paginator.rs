//! Clamped page-cursor state for a fixed-size book.

use thiserror::Error;

/// Error produced when constructing a [`Paginator`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorError {
    /// A book needs at least one page to display.
    #[error("page count must be at least 1")]
    NoPages,
}

/// Direction of a relative navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the front cover.
    Prev,
    /// Toward the back cover.
    Next,
}

/// Owns the current page index over a fixed, ordered set of pages.
///
/// Every navigation request is clamped into `0..page_count`, so after
/// construction all operations are total: out-of-range requests settle on
/// the nearest bound instead of failing. Front-ends that share one book
/// must share one `Paginator` by reference; it is the sole state holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    current: usize,
    page_count: usize,
}

impl Paginator {
    /// Create a paginator positioned on the first page.
    pub fn new(page_count: usize) -> Result<Self, PaginatorError> {
        Self::with_start_page(page_count, 0)
    }

    /// Create a paginator positioned on `start`, clamped into range.
    pub fn with_start_page(page_count: usize, start: usize) -> Result<Self, PaginatorError> {
        if page_count == 0 {
            return Err(PaginatorError::NoPages);
        }

        Ok(Self {
            current: start.min(page_count - 1),
            page_count,
        })
    }

    /// Jump to an absolute page, clamped into range.
    ///
    /// Always succeeds and returns the resulting index; requests past the
    /// last page settle on it.
    pub fn go_to(&mut self, page: usize) -> usize {
        self.current = page.min(self.last_page());
        self.current
    }

    /// Move one page in `direction`, saturating at the covers.
    pub fn step(&mut self, direction: Direction) -> usize {
        let target = match direction {
            Direction::Prev => self.current.saturating_sub(1),
            Direction::Next => self.current.saturating_add(1),
        };

        self.go_to(target)
    }

    /// Current page index, zero-based.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of pages in the set.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Index of the last page.
    pub fn last_page(&self) -> usize {
        self.page_count - 1
    }

    /// Fraction of the book read so far, in `(0, 1]`.
    ///
    /// Derived from the current index on every call, never cached.
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.page_count as f64
    }

    /// Whether the current page is the first one.
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    /// Whether the current page is the last one.
    pub fn is_last(&self) -> bool {
        self.current == self.last_page()
    }
}
