use alloc::string::String;
use core::fmt::Write;

use pagewindow::{PageWindow, PlanEntry};

use crate::PagerConfig;

/// Escapes text for use inside HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Upper bound for the up-front markup allocation.
const MAX_MARKUP_HINT: usize = 16 * 1024;

pub(crate) fn markup_capacity_hint(total_pages: usize) -> usize {
    total_pages
        .saturating_mul(32)
        .saturating_add(64)
        .min(MAX_MARKUP_HINT)
}

fn hidden_attr(visible: bool) -> &'static str {
    if visible { "" } else { " hidden" }
}

/// Renders the pager for `window` as an HTML fragment.
///
/// Hidden pages and disabled previous/next links stay in the markup with a `hidden`
/// attribute, so page links keep a stable position.
pub fn render_markup(window: &PageWindow, config: &PagerConfig) -> String {
    let mut out = String::with_capacity(markup_capacity_hint(window.total_pages()));
    out.push_str("<div class='pagination-box'>");
    // Writing into a `String` cannot fail.
    window.for_each_entry(|entry| {
        let _ = match entry {
            PlanEntry::Previous { enabled } => write!(
                out,
                "<a class='previous'{}>{}</a>",
                hidden_attr(enabled),
                escape_html(&config.previous_label)
            ),
            PlanEntry::Page(page) => write!(
                out,
                "<a class='{}'{}>{}</a>",
                if page.is_current { "page current" } else { "page" },
                hidden_attr(page.visible),
                page.number
            ),
            PlanEntry::Dots { .. } => write!(out, "<span class='dots'>...</span>"),
            PlanEntry::Next { enabled } => write!(
                out,
                "<a class='next'{}>{}</a>",
                hidden_attr(enabled),
                escape_html(&config.next_label)
            ),
        };
    });
    if config.allow_jump {
        let _ = write!(
            out,
            "<input class='page-num' name='page-num' type='text'><a class='jump'>{}</a>",
            escape_html(&config.jump_label)
        );
    }
    out.push_str("</div>");
    out
}
