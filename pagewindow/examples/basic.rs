// Example: minimal usage and a jump into the middle zone.
use pagewindow::{PageWindow, PlanEntry};

fn print_plan(w: &PageWindow) {
    let mut line = String::new();
    w.for_each_entry(|entry| match entry {
        PlanEntry::Previous { enabled } if enabled => line.push_str("« "),
        PlanEntry::Next { enabled } if enabled => line.push('»'),
        PlanEntry::Previous { .. } | PlanEntry::Next { .. } => {}
        PlanEntry::Dots { .. } => line.push_str("… "),
        PlanEntry::Page(page) if page.is_current => line.push_str(&format!("[{}] ", page.number)),
        PlanEntry::Page(page) if page.visible => line.push_str(&format!("{} ", page.number)),
        PlanEntry::Page(_) => {}
    });
    println!("{:?}: {line}", w.zone());
}

fn main() {
    let mut w = PageWindow::new(20).expect("20 pages is a valid pager");
    print_plan(&w);

    w.goto(5).expect("page 5 exists");
    print_plan(&w);

    w.last();
    print_plan(&w);

    if let Err(err) = w.goto(21) {
        println!("rejected: {err}");
    }
}
