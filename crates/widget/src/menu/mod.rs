//! Navigation menus for a [`MenuTree`].
//!
//! Two presentations share the same tree:
//!
//! - A [`DropdownController`] renders the top-level nodes as a horizontal bar.
//!   Hovering a trigger opens a [`FlyoutPanel`] below it; hovering a branch
//!   row inside an open panel chains another panel beside that row. Panels
//!   are drawn in the overlay layer so no ancestor clip can hide them, and
//!   their placement flips to stay inside the viewport.
//! - An [`AccordionController`] renders the tree as nested rows that expand
//!   and collapse in place, for narrow viewports.
//!
//! A [`MenuShell`] binds one of them to the viewport, owns the mobile drawer
//! and the search form, and forwards every selected target to a
//! [`Router`](crate::core::Router).
//!
//! # Example
//!
//! ```
//! use vitrine_widget::core::menu::{self, MenuTree};
//! use vitrine_widget::core::time::Instant;
//! use vitrine_widget::core::{Event, Point, Size, mouse};
//! use vitrine_widget::menu::MenuShell;
//!
//! let tree = MenuTree::new(vec![
//!     menu::branch!("Bileşenler", "/kategori/Bile%C5%9Fenler", [
//!         menu::leaf!("Bellek", "/ara?q=bellek"),
//!     ]),
//! ]);
//!
//! let mut visited = Vec::new();
//! let mut shell = MenuShell::new(&tree, |target: &str| visited.push(target.to_owned()));
//! shell.layout(&(), Size::new(1280.0, 800.0));
//!
//! let trigger = shell.dropdown().trigger_bounds(0).expect("laid out");
//! let _ = shell.update(
//!     &Event::Mouse(mouse::Event::CursorMoved {
//!         position: Point::new(trigger.x + 4.0, trigger.y + 4.0),
//!     }),
//!     Instant::now(),
//! );
//!
//! assert!(shell.dropdown().is_open(0));
//! ```
//!
//! [`MenuTree`]: crate::core::menu::MenuTree
pub mod action;
pub mod position;

mod accordion;
mod dropdown;
mod flyout;
mod intent;
mod search;
mod settings;
mod shell;
mod style;

pub use accordion::{AccordionController, AccordionRow};
pub use action::Action;
pub use dropdown::DropdownController;
pub use flyout::{FlyoutPanel, PanelLayout};
pub use intent::CloseTimer;
pub use position::{AnchorRect, Placement, Position};
pub use search::SearchForm;
pub use settings::Settings;
pub use shell::{MenuShell, Presentation, Update};
pub use style::Appearance;
