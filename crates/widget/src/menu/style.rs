//! Styling for the navigation menus.
use crate::core::Color;

/// The appearance of the header, the bar, the flyouts and the drawer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// The background of the header.
    pub header_background: Color,
    /// The background of the top-level bar.
    pub bar_background: Color,
    /// The text color of the top-level bar.
    pub bar_text: Color,
    /// The highlight behind the trigger of an open dropdown.
    pub bar_path: Color,
    /// The background of a flyout.
    pub panel_background: Color,
    /// The border of a flyout.
    pub panel_border: Color,
    /// The text color of a flyout row.
    pub panel_text: Color,
    /// The highlight behind the hovered row of a flyout.
    pub path: Color,
    /// The background of the mobile drawer.
    pub drawer_background: Color,
    /// The text color of the mobile drawer.
    pub drawer_text: Color,
    /// The shade drawn over the page while the drawer is open.
    pub scrim: Color,
    /// The color of the nesting marker of the accordion.
    pub indent_marker: Color,
    /// The background of the search field.
    pub search_background: Color,
    /// The text color of the search field.
    pub search_text: Color,
    /// The color of the search placeholder.
    pub search_placeholder: Color,
    /// The background of the search button.
    pub search_button: Color,
}

impl Default for Appearance {
    fn default() -> Self {
        let navy = Color::from_rgb8(0x1a, 0x1a, 0x6c);
        let slate_700 = Color::from_rgb8(0x33, 0x41, 0x55);

        Self {
            header_background: navy,
            bar_background: Color::from_rgb8(0x0f, 0x17, 0x2a),
            bar_text: Color::WHITE,
            bar_path: Color::WHITE.scale_alpha(0.1),
            panel_background: Color::WHITE,
            panel_border: Color::from_rgb8(0xe2, 0xe8, 0xf0),
            panel_text: slate_700,
            path: Color::from_rgb8(0xf1, 0xf5, 0xf9),
            drawer_background: Color::WHITE,
            drawer_text: slate_700,
            scrim: Color::BLACK.scale_alpha(0.5),
            indent_marker: Color::from_rgb8(0xe2, 0xe8, 0xf0),
            search_background: Color::WHITE,
            search_text: Color::from_rgb8(0x0f, 0x17, 0x2a),
            search_placeholder: Color::from_rgb8(0x94, 0xa3, 0xb8),
            search_button: Color::from_rgb8(0x25, 0x63, 0xeb),
        }
    }
}
