use pagewindow::{PageWindow, PagerError};

use crate::{
    ClickTarget, Container, Document, PagerConfig, WidgetError, render_markup,
    sanitize_jump_input,
};

/// A pagination widget bound to one container.
///
/// Each instance owns its own [`PageWindow`]; several pagers on one page never share state.
/// Every state change re-renders the whole pager and then fires `on_page_change`.
///
/// The host forwards UI events:
/// - clicks via [`Pager::handle_click`] (see [`ClickTarget::from_element`])
/// - key-up in the jump input via [`Pager::handle_jump_keyup`]
#[derive(Debug)]
pub struct Pager<C> {
    window: PageWindow,
    container: C,
    config: PagerConfig,
}

impl<C: Container> Pager<C> {
    /// Looks up `config.container_id` in `document` and mounts a pager into it.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Pager`] when `config.total_pages` is zero and
    /// [`WidgetError::ContainerNotFound`] when the document has no such container.
    pub fn mount<D>(document: &mut D, config: PagerConfig) -> Result<Self, WidgetError>
    where
        D: Document<Container = C>,
    {
        let window = PageWindow::new(config.total_pages)?;
        let Some(container) = document.container_by_id(&config.container_id) else {
            awarn!(id = %config.container_id, "Pager::mount: container not found");
            return Err(WidgetError::ContainerNotFound(config.container_id));
        };
        Ok(Self::attach(window, container, config))
    }

    /// Mounts a pager into a container handle the host already holds.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Pager`] when `config.total_pages` is zero.
    pub fn new(container: C, config: PagerConfig) -> Result<Self, WidgetError> {
        let window = PageWindow::new(config.total_pages)?;
        Ok(Self::attach(window, container, config))
    }

    fn attach(window: PageWindow, container: C, config: PagerConfig) -> Self {
        adebug!(
            id = %config.container_id,
            total_pages = config.total_pages,
            allow_jump = config.allow_jump,
            "Pager::mount"
        );
        let mut pager = Self {
            window,
            container,
            config,
        };
        pager.refresh();
        pager
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn into_container(self) -> C {
        self.container
    }

    /// 1-based current page.
    pub fn current_page(&self) -> usize {
        self.window.current_page()
    }

    pub fn previous(&mut self) -> bool {
        let changed = self.window.previous();
        self.finish(changed)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        let changed = self.window.next();
        self.finish(changed)
    }

    /// Jumps to the 1-based page `page`.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::PageOutOfRange`] unless `1 <= page <= total_pages`; nothing is
    /// re-rendered in that case.
    pub fn goto(&mut self, page: usize) -> Result<bool, PagerError> {
        let changed = self.window.goto(page)?;
        Ok(self.finish(changed))
    }

    /// Dispatches a click. Returns whether the current page changed.
    ///
    /// Out-of-range page links and jumps on a pager without a jump input are ignored.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        atrace!(?target, "handle_click");
        match target {
            ClickTarget::Previous => self.previous(),
            ClickTarget::Next => self.next(),
            ClickTarget::Page(page) => self.goto(page).unwrap_or(false),
            ClickTarget::Jump => self.jump(),
        }
    }

    /// Submits the jump input.
    ///
    /// A valid page number navigates there, clears the input and focuses it. Anything else
    /// (empty, non-numeric, out of range) leaves the page unchanged and focuses the input with
    /// its text selected so the user can correct it.
    pub fn jump(&mut self) -> bool {
        if !self.config.allow_jump {
            return false;
        }
        let input = self.container.jump_input_value();
        match self.window.goto_input(&input) {
            Ok(changed) => {
                self.container.set_jump_input_value("");
                self.container.focus_jump_input(false);
                self.finish(changed)
            }
            #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
            Err(err) => {
                awarn!(%err, "jump rejected");
                self.container.focus_jump_input(true);
                false
            }
        }
    }

    /// Keeps the jump input numeric. Call on every key-up in the input.
    pub fn handle_jump_keyup(&mut self) {
        let value = self.container.jump_input_value();
        let sanitized = sanitize_jump_input(&value);
        if sanitized != value {
            self.container.set_jump_input_value(&sanitized);
        }
    }

    /// Re-renders the pager and fires `on_page_change`.
    pub fn refresh(&mut self) {
        let markup = render_markup(&self.window, &self.config);
        self.container.render(&markup);
        atrace!(current_page = self.window.current_page(), "refresh");
        if let Some(cb) = &self.config.on_page_change {
            cb(&self.window);
        }
    }

    fn finish(&mut self, changed: bool) -> bool {
        if changed {
            self.refresh();
        }
        changed
    }
}
