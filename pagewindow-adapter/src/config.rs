use alloc::string::String;
use alloc::sync::Arc;

use pagewindow::PageWindow;

/// A callback fired with the pager state after mounting and after every page change.
pub type OnPageChange = Arc<dyn Fn(&PageWindow) + Send + Sync>;

/// Configuration for [`crate::Pager`].
///
/// The configuration is flat. Start from [`PagerConfig::default`] and use the `with_*`
/// builders, or merge a [`PagerConfigPatch`] (e.g. deserialized from host-provided options).
pub struct PagerConfig {
    /// Id of the element the pager renders into.
    pub container_id: String,
    pub total_pages: usize,
    /// Renders a page-number input and a jump link.
    pub allow_jump: bool,
    pub on_page_change: Option<OnPageChange>,

    pub previous_label: String,
    pub next_label: String,
    pub jump_label: String,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            container_id: "holder".into(),
            total_pages: 10,
            allow_jump: false,
            on_page_change: None,
            previous_label: "Previous".into(),
            next_label: "Next".into(),
            jump_label: "Go".into(),
        }
    }
}

impl Clone for PagerConfig {
    fn clone(&self) -> Self {
        Self {
            container_id: self.container_id.clone(),
            total_pages: self.total_pages,
            allow_jump: self.allow_jump,
            on_page_change: self.on_page_change.clone(),
            previous_label: self.previous_label.clone(),
            next_label: self.next_label.clone(),
            jump_label: self.jump_label.clone(),
        }
    }
}

impl PagerConfig {
    pub fn new(container_id: impl Into<String>, total_pages: usize) -> Self {
        Self {
            container_id: container_id.into(),
            total_pages,
            ..Self::default()
        }
    }

    pub fn with_container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }

    pub fn with_total_pages(mut self, total_pages: usize) -> Self {
        self.total_pages = total_pages;
        self
    }

    pub fn with_allow_jump(mut self, allow_jump: bool) -> Self {
        self.allow_jump = allow_jump;
        self
    }

    pub fn with_on_page_change(
        mut self,
        on_page_change: Option<impl Fn(&PageWindow) + Send + Sync + 'static>,
    ) -> Self {
        self.on_page_change = on_page_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_labels(
        mut self,
        previous: impl Into<String>,
        next: impl Into<String>,
        jump: impl Into<String>,
    ) -> Self {
        self.previous_label = previous.into();
        self.next_label = next.into();
        self.jump_label = jump.into();
        self
    }

    /// Overwrites every field that is set in `patch`; unset fields keep their current value.
    pub fn merge(mut self, patch: PagerConfigPatch) -> Self {
        if let Some(container_id) = patch.container_id {
            self.container_id = container_id;
        }
        if let Some(total_pages) = patch.total_pages {
            self.total_pages = total_pages;
        }
        if let Some(allow_jump) = patch.allow_jump {
            self.allow_jump = allow_jump;
        }
        if let Some(label) = patch.previous_label {
            self.previous_label = label;
        }
        if let Some(label) = patch.next_label {
            self.next_label = label;
        }
        if let Some(label) = patch.jump_label {
            self.jump_label = label;
        }
        self
    }
}

impl From<PagerConfigPatch> for PagerConfig {
    fn from(patch: PagerConfigPatch) -> Self {
        Self::default().merge(patch)
    }
}

impl core::fmt::Debug for PagerConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagerConfig")
            .field("container_id", &self.container_id)
            .field("total_pages", &self.total_pages)
            .field("allow_jump", &self.allow_jump)
            .field("on_page_change", &self.on_page_change.as_ref().map(|_| ".."))
            .field("previous_label", &self.previous_label)
            .field("next_label", &self.next_label)
            .field("jump_label", &self.jump_label)
            .finish()
    }
}

/// Host-provided options where every field is optional.
///
/// With `feature = "serde"`, this type deserializes from camelCase keys (`containerId`,
/// `totalPages`, `allowJump`, `previousLabel`, `nextLabel`, `jumpLabel`). The short names
/// `holder`, `total` and `jump` are accepted too. Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PagerConfigPatch {
    #[cfg_attr(feature = "serde", serde(alias = "holder"))]
    pub container_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(alias = "total"))]
    pub total_pages: Option<usize>,
    #[cfg_attr(feature = "serde", serde(alias = "jump"))]
    pub allow_jump: Option<bool>,
    pub previous_label: Option<String>,
    pub next_label: Option<String>,
    pub jump_label: Option<String>,
}
