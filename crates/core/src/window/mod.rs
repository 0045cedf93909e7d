//! Build window-based GUI applications.
mod event;
mod redraw_request;

pub use event::Event;
pub use redraw_request::RedrawRequest;
