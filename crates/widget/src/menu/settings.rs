//! Metrics and timings of the navigation menus.
use crate::core::time::{Duration, milliseconds};

/// The metrics and timings of the navigation menus.
///
/// The defaults are the ones of the catalog site; hosts rarely need to
/// change them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Grace period between the pointer leaving a top-level item and its
    /// dropdown actually closing.
    pub close_delay: Duration,
    /// Minimum width of the first-level dropdown below a trigger.
    pub dropdown_min_width: f32,
    /// Width of every nested flyout.
    pub flyout_width: f32,
    /// Height of a row inside a flyout.
    pub row_height: f32,
    /// Vertical padding at the top and bottom of a flyout.
    pub panel_padding: f32,
    /// Height of the header holding the search form.
    pub header_height: f32,
    /// Height of the top-level bar.
    pub bar_height: f32,
    /// Horizontal padding on each side of a trigger label.
    pub trigger_padding: f32,
    /// Viewports at least this wide use the dropdowns, narrower ones the drawer.
    pub breakpoint: f32,
    /// Width of the mobile drawer.
    pub drawer_width: f32,
    /// Height of a row inside the accordion.
    pub accordion_row_height: f32,
    /// Indentation added at every nesting level of the accordion.
    pub indent: f32,
    /// Width of the expand affordance of an accordion branch.
    pub toggle_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            close_delay: milliseconds(120),
            dropdown_min_width: 220.0,
            flyout_width: 208.0,
            row_height: 36.0,
            panel_padding: 4.0,
            header_height: 64.0,
            bar_height: 44.0,
            trigger_padding: 16.0,
            breakpoint: 1024.0,
            drawer_width: 320.0,
            accordion_row_height: 40.0,
            indent: 16.0,
            toggle_width: 40.0,
        }
    }
}
