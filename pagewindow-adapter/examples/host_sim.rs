// Example: a host forwarding clicks and key-ups to a mounted pager.
use pagewindow_adapter::{ClickTarget, MemoryDocument, Pager, PagerConfig};

fn main() {
    let mut doc = MemoryDocument::new().with_container("holder");
    let config = PagerConfig::new("holder", 20)
        .with_allow_jump(true)
        .with_on_page_change(Some(|w: &pagewindow::PageWindow| {
            println!("page changed: {} / {}", w.current_page(), w.total_pages());
        }));
    let mut pager = Pager::mount(&mut doc, config).expect("container exists");

    // Clicks arrive as (tag, class, text) triples from the host's event handler.
    for (tag, class, text) in [("a", "next", "Next"), ("a", "page", "9"), ("span", "dots", "...")] {
        if let Some(target) = ClickTarget::from_element(tag, class, text) {
            pager.handle_click(target);
        }
    }

    // The user types into the jump input; non-digits are stripped on key-up.
    pager.container_mut().jump_input = "1x7".into();
    pager.handle_jump_keyup();
    pager.handle_click(ClickTarget::Jump);

    println!("{}", pager.container().markup);
}
