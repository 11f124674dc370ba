use alloc::string::String;

/// Errors reported by [`crate::PageWindow`].
///
/// None of these leave the window in a modified state: a rejected transition is a no-op.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PagerError {
    /// A pager needs at least one page.
    #[error("total page count must be at least 1 (got {0})")]
    InvalidTotalPages(usize),

    /// A 1-based page number outside `1..=total_pages`.
    #[error("page {page} is out of range (expected 1..={total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },

    /// A 0-based page index outside `0..total_pages`.
    #[error("page index {index} is out of range (expected 0..{total_pages})")]
    IndexOutOfRange { index: usize, total_pages: usize },

    /// User-entered text that is not a page number.
    #[error("`{0}` is not a page number")]
    InvalidPageInput(String),
}
