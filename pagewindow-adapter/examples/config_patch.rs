// Example: merge host-provided options onto the defaults.
use pagewindow_adapter::{MemoryContainer, Pager, PagerConfig, PagerConfigPatch};

fn main() {
    let patch = PagerConfigPatch {
        total_pages: Some(3),
        previous_label: Some("‹".into()),
        next_label: Some("›".into()),
        ..PagerConfigPatch::default()
    };
    let config = PagerConfig::from(patch);
    println!("{config:?}");

    let pager = Pager::new(MemoryContainer::default(), config).expect("three pages is valid");
    println!("{}", pager.container().markup);
}
