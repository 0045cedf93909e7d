//! Placement of flyout panels.
//!
//! A panel is placed relative to the rectangle of the element that opened it
//! and flipped to the other side of that element when it would overflow the
//! viewport on the right.
use crate::core::{Point, Rectangle, Size};
use crate::menu::Settings;

/// The on-screen rectangle of the element that opened a panel, captured at
/// the moment the panel opened.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorRect {
    /// Y coordinate of the top edge.
    pub top: f32,
    /// X coordinate of the left edge.
    pub left: f32,
    /// X coordinate of the right edge.
    pub right: f32,
    /// Y coordinate of the bottom edge.
    pub bottom: f32,
    /// Width of the anchor.
    pub width: f32,
    /// Height of the anchor.
    pub height: f32,
}

impl AnchorRect {
    /// Returns the anchor as a [`Rectangle`].
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.left, self.top),
            Size::new(self.width, self.height),
        )
    }
}

impl From<Rectangle> for AnchorRect {
    fn from(bounds: Rectangle) -> Self {
        Self {
            top: bounds.y,
            left: bounds.x,
            right: bounds.right(),
            bottom: bounds.bottom(),
            width: bounds.width,
            height: bounds.height,
        }
    }
}

/// Where a panel opens relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Under the anchor, left edges aligned. Used by the dropdown of a
    /// top-level item.
    Below,

    /// To the right of the anchor, top edges aligned. Used by the nested
    /// flyouts that chain off a row of an open panel.
    Beside,
}

impl Placement {
    /// Returns the width of a panel opened from `anchor` with this placement.
    ///
    /// Dropdowns are at least as wide as their trigger; nested flyouts have a
    /// fixed width.
    pub fn panel_width(self, anchor: &AnchorRect, settings: &Settings) -> f32 {
        match self {
            Placement::Below => anchor.width.max(settings.dropdown_min_width),
            Placement::Beside => settings.flyout_width,
        }
    }
}

/// The resolved top-left corner of a panel, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Y coordinate of the top edge.
    pub top: f32,
    /// X coordinate of the left edge.
    pub left: f32,
}

impl From<Position> for Point {
    fn from(position: Position) -> Self {
        Point::new(position.left, position.top)
    }
}

/// Resolves the position of a panel of `panel_width` opened from `anchor`.
///
/// - [`Placement::Below`] puts the panel under the anchor, left-aligned,
///   unless it would overflow on the right; then it is right-aligned with
///   the anchor instead.
/// - [`Placement::Beside`] puts the panel to the right of the anchor, unless
///   it would overflow; then it opens to the left of the anchor instead.
///
/// The flipped position is finally kept inside `[0, viewport_width]`, so a
/// panel no wider than the viewport is always fully visible horizontally.
pub fn resolve(
    anchor: &AnchorRect,
    panel_width: f32,
    placement: Placement,
    viewport_width: f32,
) -> Position {
    let (top, left) = match placement {
        Placement::Below => {
            let left = if anchor.left + panel_width > viewport_width {
                anchor.right - panel_width
            } else {
                anchor.left
            };

            (anchor.bottom, left)
        }
        Placement::Beside => {
            let left = if anchor.right + panel_width > viewport_width {
                anchor.left - panel_width
            } else {
                anchor.right
            };

            (anchor.top, left)
        }
    };

    let max_left = (viewport_width - panel_width).max(0.0);

    Position {
        top,
        left: left.clamp(0.0, max_left),
    }
}
