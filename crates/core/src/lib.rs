//! The core library of [vitrine].
//!
//! This library holds basic abstractions that can be reused by the menu
//! engine and by any host that embeds it: geometry, input events, the
//! [`Shell`] used to publish messages, the [`Renderer`] surface, the static
//! [`menu`] model and the [`navigation`] collaborator.
//!
//! [vitrine]: https://github.com/vitrine-rs/vitrine
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod event;
pub mod menu;
pub mod mouse;
pub mod navigation;
pub mod renderer;
pub mod time;
pub mod touch;
pub mod window;

mod color;
mod point;
mod rectangle;
mod shell;
mod size;

pub use color::Color;
pub use event::Event;
pub use navigation::Router;
pub use point::Point;
pub use rectangle::Rectangle;
pub use renderer::Renderer;
pub use shell::Shell;
pub use size::Size;
pub use smol_str::SmolStr;
