use alloc::string::String;

use pagewindow::PagerError;

/// Errors raised while constructing a [`crate::Pager`].
///
/// Navigation never fails loudly: rejected clicks and jumps are handled inside the widget.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("no container element with id `{0}`")]
    ContainerNotFound(String),

    #[error(transparent)]
    Pager(#[from] PagerError),
}
