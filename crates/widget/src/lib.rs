//! The navigation menu widgets of vitrine.
//!
//! This crate turns a static [`MenuTree`](core::menu::MenuTree) into
//! interactive menus: a hover-driven flyout system for wide viewports and an
//! accordion drawer for narrow ones. Both are driven by the host through
//! [`Event`](core::Event)s and draw themselves on any
//! [`Renderer`](core::Renderer).
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use vitrine_core as core;

pub mod menu;

pub use menu::{
    AccordionController, Action, Appearance, DropdownController, MenuShell, Presentation,
    Settings,
};
