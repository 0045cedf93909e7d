use crate::Size;
use crate::time::Instant;

/// A window-related event.
#[derive(PartialEq, Clone, Debug)]
pub enum Event {
    /// A window was resized.
    ///
    /// The [`Size`] is the new size of the viewport in logical pixels.
    Resized(Size),

    /// A window redraw was requested.
    ///
    /// The [`Instant`] contains the current time.
    RedrawRequested(Instant),

    /// A window was unfocused.
    Unfocused,
}
