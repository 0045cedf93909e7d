//! Test your vitrine menus in headless mode.
//!
//! # Basic Usage
//! Say we have a tree with a single category:
//!
//! ```
//! use vitrine_core::menu::{self, MenuTree};
//!
//! let tree = MenuTree::new(vec![
//!     menu::branch!("Bellek", "/kategori/Bellek", [
//!         menu::leaf!("DDR5", "/ara?q=ddr5"),
//!     ]),
//! ]);
//! ```
//!
//! A [`Simulator`] drives a [`MenuShell`] with a virtual clock and records
//! every navigation:
//!
//! ```
//! # use vitrine_core::menu::{self, MenuTree};
//! # let tree = MenuTree::new(vec![
//! #     menu::branch!("Bellek", "/kategori/Bellek", [
//! #         menu::leaf!("DDR5", "/ara?q=ddr5"),
//! #     ]),
//! # ]);
//! use vitrine_core::Size;
//! use vitrine_test::Simulator;
//!
//! let mut simulator = Simulator::new(&tree, Size::new(1280.0, 800.0));
//!
//! let trigger = simulator.find("Bellek")?;
//! let _ = simulator.hover(trigger.center());
//!
//! let item = simulator.find("DDR5")?;
//! let _ = simulator.click(item.center());
//!
//! assert_eq!(simulator.navigations(), ["/ara?q=ddr5"]);
//! # Ok::<(), vitrine_test::Error>(())
//! ```
//!
//! [`MenuShell`]: vitrine_widget::MenuShell
mod recorder;

pub use recorder::{Primitive, Recorder};

use vitrine_core::menu::MenuTree;
use vitrine_core::navigation::Router;
use vitrine_core::time::{Duration, Instant};
use vitrine_core::window::{self, RedrawRequest};
use vitrine_core::{Event, Point, Rectangle, Size, mouse, touch};
use vitrine_widget::menu::{MenuShell, Settings, Update};

/// The frames a single interaction may request before the simulator gives up
/// on settling it.
const MAX_FRAMES: usize = 8;

/// A simulation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// No visible text matched.
    #[error("no visible text matches: {0:?}")]
    NotFound(String),
}

/// A [`Router`] remembering every target it navigated to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    visits: Vec<String>,
}

impl History {
    /// Returns the visited targets, oldest first.
    pub fn visits(&self) -> &[String] {
        &self.visits
    }

    /// Returns the last visited target.
    pub fn last(&self) -> Option<&str> {
        self.visits.last().map(String::as_str)
    }
}

impl Router for History {
    fn navigate(&mut self, target: &str) {
        self.visits.push(target.to_owned());
    }
}

/// A user interface simulator for a [`MenuShell`].
///
/// The simulator owns the clock: time only moves forward through
/// [`advance`](Self::advance), and every redraw the menu asks for is
/// delivered as soon as it is due.
#[derive(Debug)]
pub struct Simulator<'a> {
    shell: MenuShell<'a, History>,
    viewport: Size,
    now: Instant,
    pending: RedrawRequest,
}

impl<'a> Simulator<'a> {
    /// Creates a new [`Simulator`] for the given tree and viewport.
    pub fn new(tree: &'a MenuTree, viewport: Size) -> Self {
        Self::with_settings(tree, viewport, Settings::default())
    }

    /// Creates a new [`Simulator`] with custom [`Settings`].
    pub fn with_settings(tree: &'a MenuTree, viewport: Size, settings: Settings) -> Self {
        let mut shell = MenuShell::with_settings(tree, History::default(), settings);
        shell.layout(&Recorder::new(), viewport);

        Self {
            shell,
            viewport,
            now: Instant::now(),
            pending: RedrawRequest::Wait,
        }
    }

    /// Returns the current instant of the virtual clock.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Returns the simulated [`MenuShell`].
    pub fn shell(&self) -> &MenuShell<'a, History> {
        &self.shell
    }

    /// Returns the simulated [`MenuShell`] mutably.
    pub fn shell_mut(&mut self) -> &mut MenuShell<'a, History> {
        &mut self.shell
    }

    /// Returns every target navigated to so far.
    pub fn navigations(&self) -> &[String] {
        self.shell.router().visits()
    }

    /// Delivers an [`Event`] to the menu at the current instant.
    ///
    /// The layout is recomputed when invalidated, and any redraw requested
    /// for the next frame is delivered right away.
    pub fn dispatch(&mut self, event: Event) -> Update {
        let update = self.shell.update(&event, self.now);
        self.settle(update);

        update
    }

    /// Moves the pointer to the given position.
    pub fn hover(&mut self, position: impl Into<Point>) -> Update {
        self.dispatch(Event::Mouse(mouse::Event::CursorMoved {
            position: position.into(),
        }))
    }

    /// Moves the pointer out of the window.
    pub fn leave(&mut self) -> Update {
        self.dispatch(Event::Mouse(mouse::Event::CursorLeft))
    }

    /// Moves the pointer to the given position and clicks there.
    pub fn click(&mut self, position: impl Into<Point>) -> Update {
        let _ = self.hover(position);
        let _ = self.dispatch(Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Left,
        )));

        self.dispatch(Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Left,
        )))
    }

    /// Taps the given position with a finger.
    pub fn tap(&mut self, position: impl Into<Point>) -> Update {
        let position = position.into();
        let id = touch::Finger(0);

        let _ = self.dispatch(Event::Touch(touch::Event::FingerPressed { id, position }));

        self.dispatch(Event::Touch(touch::Event::FingerLifted { id, position }))
    }

    /// Moves the pointer to the given position and scrolls the wheel by
    /// `delta` pixels. A negative `delta` reveals content further down.
    pub fn scroll(&mut self, position: impl Into<Point>, delta: f32) -> Update {
        let _ = self.hover(position);

        self.dispatch(Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Pixels { x: 0.0, y: delta },
        }))
    }

    /// Drags a finger in a straight line from `from` to `to`.
    pub fn drag(&mut self, from: impl Into<Point>, to: impl Into<Point>) -> Update {
        let (from, to) = (from.into(), to.into());
        let id = touch::Finger(0);

        let _ = self.dispatch(Event::Touch(touch::Event::FingerPressed { id, position: from }));
        let _ = self.dispatch(Event::Touch(touch::Event::FingerMoved { id, position: to }));

        self.dispatch(Event::Touch(touch::Event::FingerLifted { id, position: to }))
    }

    /// Resizes the viewport.
    pub fn resize(&mut self, viewport: Size) -> Update {
        self.viewport = viewport;

        self.dispatch(Event::Window(window::Event::Resized(viewport)))
    }

    /// Moves the clock forward, delivering every redraw that becomes due on
    /// the way.
    pub fn advance(&mut self, duration: Duration) {
        let target = self.now + duration;

        while let RedrawRequest::At(deadline) = self.pending
            && deadline <= target
        {
            self.now = self.now.max(deadline);
            self.pending = RedrawRequest::Wait;

            let update = self
                .shell
                .update(&Event::Window(window::Event::RedrawRequested(self.now)), self.now);

            self.settle(update);
        }

        self.now = target;
    }

    /// Draws the menu into a new [`Recorder`].
    pub fn render(&self) -> Recorder {
        let mut recorder = Recorder::new();
        self.shell.draw(&mut recorder);

        recorder
    }

    /// Draws the menu into a new [`Recorder`] inside the given host clip.
    pub fn render_clipped(&self, clip: Rectangle) -> Recorder {
        let mut recorder = Recorder::new();

        vitrine_core::Renderer::with_clip(&mut recorder, clip, |recorder| {
            self.shell.draw(recorder);
        });

        recorder
    }

    /// Finds the bounds of the topmost visible text with the given content.
    pub fn find(&self, text: &str) -> Result<Rectangle, Error> {
        self.render()
            .find_text(text)
            .map(|primitive| primitive.bounds)
            .ok_or_else(|| Error::NotFound(text.to_owned()))
    }

    fn settle(&mut self, mut update: Update) {
        for _ in 0..MAX_FRAMES {
            if update.layout_invalid {
                self.shell.layout(&Recorder::new(), self.viewport);
            }

            self.pending = self.pending.min(update.redraw_request);

            if self.pending != RedrawRequest::NextFrame {
                return;
            }

            self.pending = RedrawRequest::Wait;

            update = self
                .shell
                .update(&Event::Window(window::Event::RedrawRequested(self.now)), self.now);
        }
    }
}
