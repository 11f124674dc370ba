//! A headless page-window calculator for pagination widgets.
//!
//! For widget-level glue (configuration, markup, click/jump handling), see the
//! `pagewindow-adapter` crate.
//!
//! Given a total page count and the current page, this crate decides which page numbers are
//! shown, where ellipses go, and whether the previous/next links are enabled:
//!
//! - fewer than 10 pages: every page is shown
//! - near the start: pages 1..=5, an ellipsis, then the last page
//! - near the end: the first page, an ellipsis, then the last five pages
//! - in the middle: the first page, an ellipsis, seven pages centered on the current one,
//!   another ellipsis, then the last page
//!
//! It is UI-agnostic. A widget layer is expected to turn the render plan into whatever its
//! host understands (HTML, terminal cells, ...).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod calculator;
mod error;
mod plan;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use calculator::{
    COLLAPSE_THRESHOLD, EDGE_SPAN, RESERVE, for_each_entry, is_page_visible, plan_for,
};
pub use error::PagerError;
pub use plan::RenderPlan;
pub use state::PagerState;
pub use types::{PageEntry, PlanEntry, Zone};
pub use window::PageWindow;
