/// A lightweight, serializable snapshot of a pager's position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Restore it with
/// [`crate::PageWindow::restore_state`], which validates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerState {
    pub total_pages: usize,
    pub current_index: usize,
}
