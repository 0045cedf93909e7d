//! vitrine renders the category tree of a catalog as a navigation menu.
//!
//! On wide viewports the top-level categories form a bar. Hovering one opens
//! a dropdown, and hovering a category inside it opens a flyout beside it,
//! as deep as the tree goes. Flyouts are drawn in the overlay layer of the
//! [`Renderer`], so no clip of the page can cut them, and they flip to the
//! other side of their anchor instead of leaving the viewport.
//!
//! On narrow viewports a menu button opens a drawer where the same tree is
//! an accordion.
//!
//! # Usage
//! Hand a [`Router`] to [`navigation_menu`], then forward events to the
//! menu and draw it:
//!
//! ```
//! use vitrine::time::Instant;
//! use vitrine::{Event, Size, mouse};
//!
//! let mut visited = Vec::new();
//! let mut menu = vitrine::navigation_menu(|target: &str| visited.push(target.to_owned()));
//!
//! menu.layout(&(), Size::new(1280.0, 800.0));
//!
//! let trigger = menu.dropdown().trigger_bounds(0).expect("laid out");
//! let update = menu.update(
//!     &Event::Mouse(mouse::Event::CursorMoved {
//!         position: trigger.center(),
//!     }),
//!     Instant::now(),
//! );
//!
//! assert!(menu.dropdown().is_open(0));
//! menu.draw(&mut ());
//! # let _ = update;
//! ```
//!
//! The host owns the clock. When [`Update::redraw_request`] asks for a
//! redraw at some instant, deliver a
//! [`window::Event::RedrawRequested`] then: that is when a dropdown whose
//! trigger the pointer left actually closes.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use vitrine_core as core;
pub use vitrine_widget as widget;

pub mod catalog;

pub use crate::core::event;
pub use crate::core::menu;
pub use crate::core::mouse;
pub use crate::core::navigation;
pub use crate::core::renderer;
pub use crate::core::time;
pub use crate::core::touch;
pub use crate::core::window;
pub use crate::core::{Color, Event, Point, Rectangle, Renderer, Router, Size};

pub use widget::menu::{
    AccordionController, Action, Appearance, DropdownController, FlyoutPanel, MenuShell,
    Presentation, Settings, Update,
};

/// Creates the navigation menu of the catalog.
///
/// The menu shows the [`catalog::tree`] and takes no other configuration.
pub fn navigation_menu<R>(router: R) -> MenuShell<'static, R>
where
    R: Router,
{
    MenuShell::new(catalog::tree(), router)
}
