//! Navigate to the pages of the catalog.
//!
//! The menu engine never interprets a destination: a target is opaque
//! routing data carried by the menu tree and handed to a [`Router`] when a
//! leaf is selected. The helpers in this module build the targets the
//! catalog understands.

/// The path of the home page.
pub const HOME: &str = "/";

/// The path of the search results page.
pub const SEARCH: &str = "/ara";

/// The prefix of every category page.
pub const CATEGORY: &str = "/kategori/";

/// The routing collaborator of the menu.
///
/// A [`Router`] receives a path, optionally with a query component, and
/// navigates to it.
pub trait Router {
    /// Navigates to the given target.
    fn navigate(&mut self, target: &str);
}

impl<F> Router for F
where
    F: FnMut(&str),
{
    fn navigate(&mut self, target: &str) {
        self(target);
    }
}

/// Returns the search target for the given query.
///
/// The query is trimmed and percent-encoded. Returns `None` if nothing is
/// left to search for.
///
/// ```
/// use vitrine_core::navigation::search_path;
///
/// assert_eq!(search_path("  rtx 4060 ").as_deref(), Some("/ara?q=rtx%204060"));
/// assert_eq!(search_path("   "), None);
/// ```
pub fn search_path(query: &str) -> Option<String> {
    let query = query.trim();

    if query.is_empty() {
        return None;
    }

    Some(format!("{SEARCH}?q={}", urlencoding::encode(query)))
}

/// Returns the target of the category page with the given name.
pub fn category_path(name: &str) -> String {
    format!("{CATEGORY}{}", urlencoding::encode(name))
}
