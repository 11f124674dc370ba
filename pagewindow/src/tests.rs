use crate::*;

use alloc::vec;
use alloc::vec::Vec;

/// Renders a plan as a compact string, e.g. `<1 2 3 4 5 .. 12>` (hidden pages omitted,
/// `*` marks the current page, `<`/`>` only when enabled).
fn sketch(plan: &RenderPlan) -> std::string::String {
    use std::string::ToString;
    let mut parts = Vec::new();
    for entry in plan {
        match entry {
            PlanEntry::Previous { enabled: true } => parts.push("<".to_string()),
            PlanEntry::Next { enabled: true } => parts.push(">".to_string()),
            PlanEntry::Previous { .. } | PlanEntry::Next { .. } => {}
            PlanEntry::Dots { .. } => parts.push("..".to_string()),
            PlanEntry::Page(p) if p.visible && p.is_current => {
                parts.push(std::format!("*{}", p.number));
            }
            PlanEntry::Page(p) if p.visible => parts.push(p.number.to_string()),
            PlanEntry::Page(_) => {}
        }
    }
    parts.join(" ")
}

#[test]
fn new_rejects_zero_pages() {
    assert_eq!(PageWindow::new(0), Err(PagerError::InvalidTotalPages(0)));
}

#[test]
fn new_starts_on_first_page() {
    let w = PageWindow::new(7).unwrap();
    assert_eq!(w.current_index(), 0);
    assert_eq!(w.current_page(), 1);
    assert_eq!(w.total_pages(), 7);
}

#[test]
fn single_page_has_no_navigation() {
    let w = PageWindow::new(1).unwrap();
    let plan = w.plan();
    assert_eq!(
        plan.entries(),
        &[
            PlanEntry::Previous { enabled: false },
            PlanEntry::Page(PageEntry {
                number: 1,
                visible: true,
                is_current: true,
            }),
            PlanEntry::Next { enabled: false },
        ]
    );
    assert_eq!(plan.dots_count(), 0);
}

#[test]
fn small_pagers_show_every_page() {
    for total in 1..COLLAPSE_THRESHOLD {
        for current in 0..total {
            let plan = PageWindow::with_current_index(total, current).unwrap().plan();
            assert_eq!(plan.dots_count(), 0, "total={total} current={current}");
            assert_eq!(plan.visible_pages(), (1..=total).collect::<Vec<_>>());
        }
    }
}

#[test]
fn twelve_pages_on_first_page() {
    let plan = PageWindow::new(12).unwrap().plan();
    assert_eq!(plan.visible_pages(), vec![1, 2, 3, 4, 5, 12]);
    assert_eq!(plan.dots_count(), 1);
    assert!(!plan.previous_enabled());
    assert!(plan.next_enabled());
    assert_eq!(sketch(&plan), "*1 2 3 4 5 .. 12 >");
}

#[test]
fn near_start_zone_layout() {
    for current in 0..4 {
        let w = PageWindow::with_current_index(20, current).unwrap();
        assert_eq!(w.zone(), Zone::NearStart);
        assert_eq!(w.plan().visible_pages(), vec![1, 2, 3, 4, 5, 20]);
    }
}

#[test]
fn near_end_zone_layout() {
    for current in 16..20 {
        let w = PageWindow::with_current_index(20, current).unwrap();
        assert_eq!(w.zone(), Zone::NearEnd);
        assert_eq!(w.plan().visible_pages(), vec![1, 16, 17, 18, 19, 20]);
    }
    let plan = PageWindow::with_current_index(20, 19).unwrap().plan();
    assert_eq!(sketch(&plan), "< 1 .. 16 17 18 19 *20");
}

#[test]
fn middle_zone_layout() {
    let w = PageWindow::with_current_index(20, 10).unwrap();
    assert_eq!(w.zone(), Zone::Middle);
    assert_eq!(sketch(&w.plan()), "< 1 .. 8 9 10 *11 12 13 14 .. 20 >");
}

#[test]
fn zone_boundaries_follow_literal_thresholds() {
    assert_eq!(Zone::classify(20, 3), Zone::NearStart);
    assert_eq!(Zone::classify(20, 4), Zone::Middle);
    assert_eq!(Zone::classify(20, 15), Zone::Middle);
    assert_eq!(Zone::classify(20, 16), Zone::NearEnd);

    // Ten pages leave room for exactly two middle positions.
    assert_eq!(Zone::classify(10, 3), Zone::NearStart);
    assert_eq!(Zone::classify(10, 4), Zone::Middle);
    assert_eq!(Zone::classify(10, 5), Zone::Middle);
    assert_eq!(Zone::classify(10, 6), Zone::NearEnd);

    assert_eq!(Zone::classify(9, 4), Zone::Full);
}

#[test]
fn middle_window_touching_first_page_still_gets_leading_dots() {
    let plan = PageWindow::with_current_index(10, 4).unwrap().plan();
    assert_eq!(sketch(&plan), "< 1 .. 2 3 4 *5 6 7 8 .. 10 >");
    assert_eq!(plan.dots_count(), 2);
}

#[test]
fn exactly_one_current_page_for_every_position() {
    for total in 1..=40 {
        for current in 0..total {
            let plan = PageWindow::with_current_index(total, current).unwrap().plan();
            let current_pages: Vec<_> = plan.pages().filter(|p| p.is_current).collect();
            assert_eq!(current_pages.len(), 1, "total={total} current={current}");
            assert_eq!(current_pages[0].index(), current);
            assert!(current_pages[0].visible);
        }
    }
}

#[test]
fn first_and_last_pages_are_always_visible() {
    for total in 1..=40 {
        for current in 0..total {
            let w = PageWindow::with_current_index(total, current).unwrap();
            assert!(w.is_page_visible(0));
            assert!(w.is_page_visible(total - 1));
            let pages = w.plan().visible_pages();
            assert_eq!(pages.first(), Some(&1));
            assert_eq!(pages.last(), Some(&total));
        }
    }
}

#[test]
fn dots_count_matches_zone() {
    for total in COLLAPSE_THRESHOLD..=40 {
        for current in 0..total {
            let w = PageWindow::with_current_index(total, current).unwrap();
            let plan = w.plan();
            assert_eq!(plan.dots_count(), w.zone().dots_count());
            if w.zone() == Zone::Middle {
                // Seven-page window plus the forced first and last pages.
                assert_eq!(plan.visible_pages().len(), 2 * RESERVE + 1 + 2);
            }
        }
    }
}

#[test]
fn plan_lists_every_page_in_order() {
    let plan = PageWindow::with_current_index(25, 12).unwrap().plan();
    let numbers: Vec<_> = plan.pages().map(|p| p.number).collect();
    assert_eq!(numbers, (1..=25).collect::<Vec<_>>());
    assert!(matches!(plan.entries().first(), Some(PlanEntry::Previous { .. })));
    assert!(matches!(plan.entries().last(), Some(PlanEntry::Next { .. })));
}

#[test]
fn dots_sit_before_the_page_they_name() {
    let plan = PageWindow::with_current_index(30, 15).unwrap().plan();
    let entries = plan.entries();
    for (i, entry) in entries.iter().enumerate() {
        if let PlanEntry::Dots { before_index } = entry {
            let following = entries[i + 1].as_page().unwrap();
            assert_eq!(following.index(), *before_index);
        }
    }
}

#[test]
fn is_page_visible_agrees_with_plan() {
    for current in 0..23 {
        let w = PageWindow::with_current_index(23, current).unwrap();
        for page in w.plan().pages() {
            assert_eq!(w.is_page_visible(page.index()), page.visible);
        }
    }
    let w = PageWindow::new(5).unwrap();
    assert!(!w.is_page_visible(5));
}

#[test]
fn previous_on_first_page_is_a_noop() {
    let mut w = PageWindow::new(20).unwrap();
    assert!(!w.previous());
    assert_eq!(w.current_index(), 0);
    assert!(!w.plan().previous_enabled());
}

#[test]
fn next_on_last_page_is_a_noop() {
    let mut w = PageWindow::with_current_index(20, 19).unwrap();
    assert!(!w.next());
    assert_eq!(w.current_index(), 19);
    assert!(!w.plan().next_enabled());
}

#[test]
fn previous_and_next_step_by_one() {
    let mut w = PageWindow::new(3).unwrap();
    assert!(w.next());
    assert!(w.next());
    assert_eq!(w.current_page(), 3);
    assert!(w.previous());
    assert_eq!(w.current_page(), 2);
}

#[test]
fn goto_recenters_middle_window() {
    let mut w = PageWindow::new(20).unwrap();
    assert_eq!(w.goto(5), Ok(true));
    assert_eq!(w.current_index(), 4);
    let plan = w.plan();
    assert_eq!(plan.visible_pages(), vec![1, 2, 3, 4, 5, 6, 7, 8, 20]);
    assert_eq!(plan.dots_count(), 2);
}

#[test]
fn goto_out_of_range_is_rejected() {
    let mut w = PageWindow::new(20).unwrap();
    assert_eq!(
        w.goto(0),
        Err(PagerError::PageOutOfRange {
            page: 0,
            total_pages: 20
        })
    );
    assert_eq!(
        w.goto(21),
        Err(PagerError::PageOutOfRange {
            page: 21,
            total_pages: 20
        })
    );
    assert_eq!(w.current_index(), 0);
}

#[test]
fn goto_current_page_reports_no_change() {
    let mut w = PageWindow::new(20).unwrap();
    assert_eq!(w.goto(1), Ok(false));
}

#[test]
fn goto_input_parses_page_numbers() {
    let mut w = PageWindow::new(20).unwrap();
    assert_eq!(w.goto_input(" 12 "), Ok(true));
    assert_eq!(w.current_page(), 12);
    assert_eq!(
        w.goto_input("abc"),
        Err(PagerError::InvalidPageInput("abc".into()))
    );
    assert_eq!(w.goto_input(""), Err(PagerError::InvalidPageInput("".into())));
    assert!(w.goto_input("99").is_err());
    assert_eq!(w.current_page(), 12);
}

#[test]
fn first_and_last_jump_to_edges() {
    let mut w = PageWindow::with_current_index(15, 7).unwrap();
    assert!(w.last());
    assert_eq!(w.current_index(), 14);
    assert!(!w.last());
    assert!(w.first());
    assert_eq!(w.current_index(), 0);
}

#[test]
fn with_current_index_validates() {
    assert_eq!(
        PageWindow::with_current_index(4, 4),
        Err(PagerError::IndexOutOfRange {
            index: 4,
            total_pages: 4
        })
    );
}

#[test]
fn restore_state_roundtrip_and_validation() {
    let mut w = PageWindow::with_current_index(30, 17).unwrap();
    let snapshot = w.state();
    w.first();
    w.restore_state(snapshot).unwrap();
    assert_eq!(w.current_index(), 17);

    let bad = PagerState {
        total_pages: 10,
        current_index: 10,
    };
    assert!(w.restore_state(bad).is_err());
    assert_eq!(w.state(), snapshot);
}

#[test]
fn instances_are_independent() {
    let mut a = PageWindow::new(20).unwrap();
    let b = PageWindow::new(20).unwrap();
    a.goto(9).unwrap();
    assert_eq!(a.current_index(), 8);
    assert_eq!(b.current_index(), 0);
}

#[test]
fn plan_for_validates_inputs() {
    assert_eq!(plan_for(0, 0), Err(PagerError::InvalidTotalPages(0)));
    assert!(plan_for(3, 3).is_err());

    let mut emitted = 0;
    assert!(for_each_entry(3, 5, |_| emitted += 1).is_err());
    assert_eq!(emitted, 0);

    assert_eq!(
        plan_for(12, 0).unwrap(),
        PageWindow::new(12).unwrap().plan()
    );
}

#[test]
fn is_page_visible_rejects_invalid_input() {
    assert_eq!(is_page_visible(0, 0, 5), Err(PagerError::InvalidTotalPages(0)));
    assert_eq!(
        is_page_visible(12, 99, 0),
        Err(PagerError::IndexOutOfRange {
            index: 99,
            total_pages: 12
        })
    );
    assert_eq!(
        is_page_visible(12, 0, 12),
        Err(PagerError::IndexOutOfRange {
            index: 12,
            total_pages: 12
        })
    );
    assert_eq!(is_page_visible(12, 0, 11), Ok(true));
    assert_eq!(is_page_visible(12, 0, 6), Ok(false));
}

#[test]
fn huge_page_counts_do_not_overflow() {
    assert_eq!(crate::calculator::plan_capacity_hint(usize::MAX), 1024);
    assert_eq!(crate::calculator::plan_capacity_hint(6), 10);

    let mut w = PageWindow::new(usize::MAX).unwrap();
    assert!(w.last());
    assert_eq!(w.zone(), Zone::NearEnd);
    assert!(w.is_page_visible(usize::MAX - 1));
    assert!(!w.is_page_visible(usize::MAX - 6));
    assert!(!w.is_page_visible(usize::MAX));
}

#[test]
fn for_each_entry_matches_plan() {
    let w = PageWindow::with_current_index(50, 30).unwrap();
    let mut entries = Vec::new();
    w.for_each_entry(|e| entries.push(e));
    assert_eq!(entries.as_slice(), w.plan().entries());
}

#[cfg(feature = "serde")]
#[test]
fn state_serializes_as_plain_fields() {
    let state = PageWindow::with_current_index(8, 3).unwrap().state();
    let json = serde_json::to_string(&state).unwrap();
    assert_eq!(json, r#"{"total_pages":8,"current_index":3}"#);
    let back: PagerState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[cfg(feature = "serde")]
#[test]
fn plan_entries_serialize_with_type_tag() {
    let json = serde_json::to_string(&PlanEntry::Dots { before_index: 5 }).unwrap();
    assert_eq!(json, r#"{"type":"dots","before_index":5}"#);
}

#[cfg(feature = "serde")]
#[test]
fn plan_entry_type_tags() {
    let tag = |entry: PlanEntry| {
        let value = serde_json::to_value(entry).unwrap();
        std::string::String::from(value["type"].as_str().unwrap())
    };
    assert_eq!(tag(PlanEntry::Previous { enabled: true }), "prev");
    assert_eq!(
        tag(PlanEntry::Page(PageEntry {
            number: 1,
            visible: true,
            is_current: true,
        })),
        "page"
    );
    assert_eq!(tag(PlanEntry::Dots { before_index: 5 }), "dots");
    assert_eq!(tag(PlanEntry::Next { enabled: false }), "next");

    let json = serde_json::to_string(&PageWindow::new(1).unwrap().plan()).unwrap();
    assert!(json.starts_with(r#"{"entries":[{"type":"prev","enabled":false}"#));
    let back: PlanEntry = serde_json::from_str(r#"{"type":"prev","enabled":true}"#).unwrap();
    assert_eq!(back, PlanEntry::Previous { enabled: true });
}
