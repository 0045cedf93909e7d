//! Build touch events.
use crate::Point;

/// A touch interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A touch interaction was started.
    FingerPressed {
        /// The finger of the interaction.
        id: Finger,
        /// The position of the finger.
        position: Point,
    },

    /// An on-going touch interaction was moved.
    FingerMoved {
        /// The finger of the interaction.
        id: Finger,
        /// The position of the finger.
        position: Point,
    },

    /// A touch interaction was ended.
    FingerLifted {
        /// The finger of the interaction.
        id: Finger,
        /// The position of the finger.
        position: Point,
    },

    /// A touch interaction was canceled.
    FingerLost {
        /// The finger of the interaction.
        id: Finger,
        /// The position of the finger.
        position: Point,
    },
}

/// A unique identifier representing a finger on a touch interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Finger(pub u64);
