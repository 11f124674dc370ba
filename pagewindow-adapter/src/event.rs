use alloc::string::String;

/// A clickable part of the rendered pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClickTarget {
    Previous,
    Next,
    /// A page link, by 1-based page number.
    Page(usize),
    Jump,
}

impl ClickTarget {
    /// Maps a clicked element to a target, using the markup produced by
    /// [`crate::render_markup`].
    ///
    /// Only `<a>` elements whose class is exactly `previous`, `next`, `page` or `jump` count.
    /// The current page carries `page current` and is ignored, as is a page link whose text is
    /// not a number.
    pub fn from_element(tag_name: &str, class_name: &str, text: &str) -> Option<Self> {
        if !tag_name.eq_ignore_ascii_case("a") {
            return None;
        }
        match class_name {
            "previous" => Some(Self::Previous),
            "next" => Some(Self::Next),
            "jump" => Some(Self::Jump),
            "page" => text.trim().parse().ok().map(Self::Page),
            _ => None,
        }
    }
}

/// Strips everything but ASCII digits from jump-input text.
pub fn sanitize_jump_input(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
