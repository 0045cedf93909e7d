//! Handle events of a user interface.
use crate::mouse;
use crate::touch;
use crate::window;

/// A user interface event.
///
/// Hosts translate their platform events into this type before handing them
/// to a menu controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A mouse event
    Mouse(mouse::Event),

    /// A window event
    Window(window::Event),

    /// A touch event
    Touch(touch::Event),
}

/// The status of an [`Event`] after being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The [`Event`] was **NOT** handled by any widget.
    Ignored,

    /// The [`Event`] was handled and processed by a widget.
    Captured,
}
