/// Which part of the page list the current page falls into.
///
/// Decides which pages are hidden and where the ellipses go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    /// Fewer than [`crate::COLLAPSE_THRESHOLD`] pages: nothing is collapsed.
    Full,
    NearStart,
    Middle,
    NearEnd,
}

impl Zone {
    /// Classifies `current_index` for a pager with `total_pages` pages.
    ///
    /// The thresholds are asymmetric on purpose: `current_index < 4` is near the start while
    /// near the end starts at `current_index > total_pages - 5`.
    ///
    /// Callers guarantee `current_index < total_pages`.
    pub(crate) fn classify(total_pages: usize, current_index: usize) -> Self {
        if total_pages < crate::COLLAPSE_THRESHOLD {
            return Self::Full;
        }
        let last = total_pages - 1;
        if current_index < crate::EDGE_SPAN - 1 {
            Self::NearStart
        } else if current_index > last - (crate::EDGE_SPAN - 1) {
            Self::NearEnd
        } else {
            Self::Middle
        }
    }

    /// Number of ellipsis markers rendered in this zone.
    pub fn dots_count(self) -> usize {
        match self {
            Self::Full => 0,
            Self::NearStart | Self::NearEnd => 1,
            Self::Middle => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageEntry {
    /// 1-based page number.
    pub number: usize,
    pub visible: bool,
    pub is_current: bool,
}

impl PageEntry {
    /// 0-based page index.
    pub fn index(&self) -> usize {
        self.number - 1
    }
}

/// One item of a render plan, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum PlanEntry {
    #[cfg_attr(feature = "serde", serde(rename = "prev"))]
    Previous {
        enabled: bool,
    },
    Page(PageEntry),
    /// An ellipsis placed right before the page at `before_index` (0-based).
    Dots {
        before_index: usize,
    },
    Next {
        enabled: bool,
    },
}

impl PlanEntry {
    pub fn as_page(&self) -> Option<&PageEntry> {
        match self {
            Self::Page(page) => Some(page),
            _ => None,
        }
    }

    pub fn is_dots(&self) -> bool {
        matches!(self, Self::Dots { .. })
    }
}
