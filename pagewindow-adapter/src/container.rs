use alloc::collections::BTreeMap;
use alloc::string::String;

/// The element a [`crate::Pager`] renders into.
///
/// Implemented by the host. The pager keeps the handle it was given and never looks it up
/// again.
pub trait Container {
    /// Replaces the container's content with `markup`.
    fn render(&mut self, markup: &str);

    /// Current text of the jump input. Empty when the pager has no jump input.
    fn jump_input_value(&self) -> String;

    fn set_jump_input_value(&mut self, value: &str);

    /// Moves focus to the jump input, optionally selecting its text.
    fn focus_jump_input(&mut self, select_contents: bool);
}

/// Resolves containers by element id.
pub trait Document {
    type Container: Container;

    fn container_by_id(&mut self, id: &str) -> Option<Self::Container>;
}

/// An in-memory [`Container`] that records what the pager did to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryContainer {
    pub markup: String,
    pub jump_input: String,
    pub jump_focused: bool,
    pub jump_selected: bool,
    pub render_count: usize,
}

impl Container for MemoryContainer {
    fn render(&mut self, markup: &str) {
        self.markup.clear();
        self.markup.push_str(markup);
        self.render_count += 1;
    }

    fn jump_input_value(&self) -> String {
        self.jump_input.clone()
    }

    fn set_jump_input_value(&mut self, value: &str) {
        self.jump_input.clear();
        self.jump_input.push_str(value);
    }

    fn focus_jump_input(&mut self, select_contents: bool) {
        self.jump_focused = true;
        self.jump_selected = select_contents;
    }
}

/// An in-memory [`Document`]. Containers are handed out once: a second lookup of the same id
/// returns `None`.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    containers: BTreeMap<String, MemoryContainer>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.insert(id, MemoryContainer::default());
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, container: MemoryContainer) {
        self.containers.insert(id.into(), container);
    }
}

impl Document for MemoryDocument {
    type Container = MemoryContainer;

    fn container_by_id(&mut self, id: &str) -> Option<MemoryContainer> {
        self.containers.remove(id)
    }
}
