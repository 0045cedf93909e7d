//! The inline search form of the header.
use crate::core::navigation;

/// The value of a search input and its submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    query: String,
}

impl SearchForm {
    /// Creates an empty [`SearchForm`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of the input.
    pub fn value(&self) -> &str {
        &self.query
    }

    /// Replaces the value of the input.
    pub fn input(&mut self, value: impl Into<String>) {
        self.query = value.into();
    }

    /// Submits the form.
    ///
    /// Returns the search route for the trimmed query and clears the input,
    /// or `None` without touching the input if the query is blank.
    pub fn submit(&mut self) -> Option<String> {
        let target = navigation::search_path(&self.query)?;
        self.query.clear();

        Some(target)
    }
}
