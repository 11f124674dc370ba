use crate::calculator;
use crate::{PagerError, PagerState, PlanEntry, RenderPlan, Zone};

/// Per-instance pager state: a fixed page count and the current page.
///
/// This type holds no UI objects. Navigation methods validate their input and leave the state
/// untouched when they reject it, so `current_index < total_pages` always holds.
///
/// Every accessor recomputes from scratch; the render plan is never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageWindow {
    total_pages: usize,
    current_index: usize,
}

impl PageWindow {
    /// Creates a pager positioned on the first page.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::InvalidTotalPages`] when `total_pages` is zero.
    pub fn new(total_pages: usize) -> Result<Self, PagerError> {
        if total_pages == 0 {
            pwarn!("PageWindow::new with zero pages");
            return Err(PagerError::InvalidTotalPages(total_pages));
        }
        pdebug!(total_pages, "PageWindow::new");
        Ok(Self {
            total_pages,
            current_index: 0,
        })
    }

    /// Creates a pager positioned on `current_index` (0-based).
    ///
    /// # Errors
    ///
    /// Fails like [`PageWindow::new`], or with [`PagerError::IndexOutOfRange`].
    pub fn with_current_index(total_pages: usize, current_index: usize) -> Result<Self, PagerError> {
        let mut window = Self::new(total_pages)?;
        window.goto_index(current_index)?;
        Ok(window)
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based current page number.
    pub fn current_page(&self) -> usize {
        self.current_index + 1
    }

    pub fn last_index(&self) -> usize {
        self.total_pages - 1
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_index < self.last_index()
    }

    pub fn zone(&self) -> Zone {
        Zone::classify(self.total_pages, self.current_index)
    }

    pub fn state(&self) -> PagerState {
        PagerState {
            total_pages: self.total_pages,
            current_index: self.current_index,
        }
    }

    /// Restores a snapshot taken with [`PageWindow::state`].
    ///
    /// The page count is part of the snapshot, so this can also resize the pager.
    ///
    /// # Errors
    ///
    /// Rejects snapshots with zero pages or an out-of-range index; the window is unchanged.
    pub fn restore_state(&mut self, state: PagerState) -> Result<(), PagerError> {
        let restored = Self::with_current_index(state.total_pages, state.current_index)?;
        ptrace!(
            total_pages = state.total_pages,
            current_index = state.current_index,
            "restore_state"
        );
        *self = restored;
        Ok(())
    }

    /// Moves one page back. Returns `false` (and does nothing) on the first page.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_index -= 1;
        ptrace!(current_index = self.current_index, "previous");
        true
    }

    /// Moves one page forward. Returns `false` (and does nothing) on the last page.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_index += 1;
        ptrace!(current_index = self.current_index, "next");
        true
    }

    pub fn first(&mut self) -> bool {
        self.set_index(0)
    }

    pub fn last(&mut self) -> bool {
        self.set_index(self.last_index())
    }

    /// Jumps to the 1-based page `page`.
    ///
    /// Returns `Ok(true)` when the current page changed and `Ok(false)` when `page` already was
    /// the current page.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::PageOutOfRange`] unless `1 <= page <= total_pages`; the state is
    /// left as it was.
    pub fn goto(&mut self, page: usize) -> Result<bool, PagerError> {
        if page == 0 || page > self.total_pages {
            pwarn!(page, total_pages = self.total_pages, "goto: page out of range");
            return Err(PagerError::PageOutOfRange {
                page,
                total_pages: self.total_pages,
            });
        }
        Ok(self.set_index(page - 1))
    }

    /// Jumps to the 0-based page `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::IndexOutOfRange`] unless `index < total_pages`.
    pub fn goto_index(&mut self, index: usize) -> Result<bool, PagerError> {
        if index >= self.total_pages {
            pwarn!(index, total_pages = self.total_pages, "goto_index: index out of range");
            return Err(PagerError::IndexOutOfRange {
                index,
                total_pages: self.total_pages,
            });
        }
        Ok(self.set_index(index))
    }

    /// Parses user-entered text as a 1-based page number and jumps to it.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::InvalidPageInput`] for empty or non-numeric text, otherwise fails
    /// like [`PageWindow::goto`].
    pub fn goto_input(&mut self, input: &str) -> Result<bool, PagerError> {
        let trimmed = input.trim();
        let page = trimmed
            .parse::<usize>()
            .map_err(|_| PagerError::InvalidPageInput(trimmed.into()))?;
        self.goto(page)
    }

    fn set_index(&mut self, index: usize) -> bool {
        debug_assert!(index < self.total_pages, "set_index out of range");
        if self.current_index == index {
            return false;
        }
        self.current_index = index;
        ptrace!(current_index = index, "set_index");
        true
    }

    /// Whether the page at 0-based `index` is shown for the current position.
    ///
    /// Out-of-range indexes are never shown.
    pub fn is_page_visible(&self, index: usize) -> bool {
        matches!(
            calculator::is_page_visible(self.total_pages, self.current_index, index),
            Ok(true)
        )
    }

    /// Visits every render-plan entry in display order without allocating.
    pub fn for_each_entry(&self, f: impl FnMut(PlanEntry)) {
        // The invariant `current_index < total_pages` makes this infallible.
        let _ = calculator::for_each_entry(self.total_pages, self.current_index, f);
    }

    /// Computes the full render plan for the current position.
    pub fn plan(&self) -> RenderPlan {
        let capacity = calculator::plan_capacity_hint(self.total_pages);
        let mut entries = alloc::vec::Vec::with_capacity(capacity);
        self.for_each_entry(|entry| entries.push(entry));
        RenderPlan::from_entries(entries)
    }
}
