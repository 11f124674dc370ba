use alloc::vec::Vec;

use crate::{PageEntry, PlanEntry};

/// An ordered render plan: previous link, pages and ellipses, next link.
///
/// Recomputed wholesale on every state change; there is no diffing against a previous plan.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderPlan {
    entries: Vec<PlanEntry>,
}

impl RenderPlan {
    pub(crate) fn from_entries(entries: Vec<PlanEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<PlanEntry> {
        self.entries
    }

    pub fn pages(&self) -> impl Iterator<Item = &PageEntry> + '_ {
        self.entries.iter().filter_map(PlanEntry::as_page)
    }

    /// 1-based numbers of the pages that are shown.
    pub fn visible_pages(&self) -> Vec<usize> {
        self.pages()
            .filter(|page| page.visible)
            .map(|page| page.number)
            .collect()
    }

    pub fn dots_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_dots()).count()
    }

    pub fn current(&self) -> Option<&PageEntry> {
        self.pages().find(|page| page.is_current)
    }

    pub fn previous_enabled(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry, PlanEntry::Previous { enabled: true }))
    }

    pub fn next_enabled(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry, PlanEntry::Next { enabled: true }))
    }
}

impl<'a> IntoIterator for &'a RenderPlan {
    type Item = &'a PlanEntry;
    type IntoIter = core::slice::Iter<'a, PlanEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
