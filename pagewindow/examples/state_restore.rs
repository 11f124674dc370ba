// Example: snapshot a pager position and restore it later.
use pagewindow::{PageWindow, PagerState};

fn main() {
    let mut w = PageWindow::new(42).expect("valid pager");
    w.goto(17).expect("page 17 exists");
    let saved: PagerState = w.state();
    println!("saved: {saved:?}");

    w.first();
    println!("after first(): page {}", w.current_page());

    w.restore_state(saved).expect("snapshot is valid");
    println!("restored: page {} ({:?})", w.current_page(), w.zone());
}
