use crate::{PageEntry, PagerError, PlanEntry, RenderPlan, Zone};

/// Page counts below this are rendered without collapsing.
pub const COLLAPSE_THRESHOLD: usize = 10;

/// Number of pages shown next to the near edge in the near-start/near-end zones.
pub const EDGE_SPAN: usize = 5;

/// Half-width of the middle-zone window around the current page.
pub const RESERVE: usize = 3;

/// The contiguous block of pages a zone keeps, as inclusive 0-based indexes.
///
/// `Zone::Full` keeps everything.
fn window_bounds(zone: Zone, total_pages: usize, current_index: usize) -> (usize, usize) {
    let last = total_pages - 1;
    match zone {
        Zone::Full => (0, last),
        Zone::NearStart => (0, EDGE_SPAN - 1),
        Zone::NearEnd => (total_pages - EDGE_SPAN, last),
        Zone::Middle => (current_index - RESERVE, current_index + RESERVE),
    }
}

/// 0-based indexes that get an ellipsis right before them. At most two.
fn dots_positions(zone: Zone, total_pages: usize, current_index: usize) -> [Option<usize>; 2] {
    let (start, end) = window_bounds(zone, total_pages, current_index);
    match zone {
        Zone::Full => [None, None],
        Zone::NearStart => [Some(end + 1), None],
        Zone::NearEnd => [Some(start), None],
        Zone::Middle => [Some(start), Some(end + 1)],
    }
}

fn validate(total_pages: usize, current_index: usize) -> Result<(), PagerError> {
    if total_pages == 0 {
        return Err(PagerError::InvalidTotalPages(total_pages));
    }
    if current_index >= total_pages {
        return Err(PagerError::IndexOutOfRange {
            index: current_index,
            total_pages,
        });
    }
    Ok(())
}

/// Upper bound for up-front plan allocations; larger plans grow on demand.
const MAX_CAPACITY_HINT: usize = 1024;

/// Capacity hint for a plan over `total_pages` pages (pages plus prev, next and two dots).
pub(crate) fn plan_capacity_hint(total_pages: usize) -> usize {
    total_pages.saturating_add(4).min(MAX_CAPACITY_HINT)
}

/// Whether the page at `index` is shown.
///
/// The first and last pages are always shown, whatever the zone says.
///
/// # Errors
///
/// Fails like [`for_each_entry`], or with [`PagerError::IndexOutOfRange`] when `index` is past
/// the last page.
pub fn is_page_visible(
    total_pages: usize,
    current_index: usize,
    index: usize,
) -> Result<bool, PagerError> {
    validate(total_pages, current_index)?;
    if index >= total_pages {
        return Err(PagerError::IndexOutOfRange { index, total_pages });
    }
    if index == 0 || index + 1 == total_pages {
        return Ok(true);
    }
    let zone = Zone::classify(total_pages, current_index);
    let (start, end) = window_bounds(zone, total_pages, current_index);
    Ok((start..=end).contains(&index))
}

/// Emits the render plan for `(total_pages, current_index)` without allocating.
///
/// Entries arrive in display order: previous link, pages and ellipses left to right, next link.
///
/// # Errors
///
/// Returns [`PagerError::InvalidTotalPages`] for zero pages and
/// [`PagerError::IndexOutOfRange`] when `current_index` is past the last page. Nothing is
/// emitted in either case.
pub fn for_each_entry(
    total_pages: usize,
    current_index: usize,
    mut f: impl FnMut(PlanEntry),
) -> Result<(), PagerError> {
    validate(total_pages, current_index)?;

    let zone = Zone::classify(total_pages, current_index);
    let (start, end) = window_bounds(zone, total_pages, current_index);
    let dots = dots_positions(zone, total_pages, current_index);
    let last = total_pages - 1;
    ptrace!(total_pages, current_index, ?zone, "for_each_entry");

    f(PlanEntry::Previous {
        enabled: current_index > 0,
    });
    for index in 0..total_pages {
        if dots.contains(&Some(index)) {
            f(PlanEntry::Dots {
                before_index: index,
            });
        }
        let visible = index == 0 || index == last || (start..=end).contains(&index);
        f(PlanEntry::Page(PageEntry {
            number: index + 1,
            visible,
            is_current: index == current_index,
        }));
    }
    f(PlanEntry::Next {
        enabled: current_index < last,
    });
    Ok(())
}

/// Collects the render plan for `(total_pages, current_index)`.
///
/// # Errors
///
/// Same as [`for_each_entry`].
pub fn plan_for(total_pages: usize, current_index: usize) -> Result<RenderPlan, PagerError> {
    let mut entries = alloc::vec::Vec::with_capacity(plan_capacity_hint(total_pages));
    for_each_entry(total_pages, current_index, |entry| entries.push(entry))?;
    Ok(RenderPlan::from_entries(entries))
}
