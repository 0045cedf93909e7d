//! Messages published by the menu controllers.
use crate::core::SmolStr;

/// An action requested by a menu controller through its
/// [`Shell`](crate::core::Shell).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigate to the given target.
    Navigate(SmolStr),

    /// Dismiss the container of the menu (e.g. the mobile drawer).
    Close,
}
