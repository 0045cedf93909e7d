//! Write your own renderer.
use crate::{Color, Point, Rectangle, Size};

/// The stacking layer a primitive is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layer {
    /// The regular flow of the page.
    ///
    /// Primitives here are subject to every enclosing clip.
    #[default]
    Base,

    /// The top layer, attached to the root of the surface.
    ///
    /// Primitives drawn here are stacked above everything in [`Layer::Base`]
    /// and ignore any clip that was active when the layer was started.
    Overlay,
}

/// A component that can be used by widgets to draw themselves on a screen.
///
/// Hosts provide the implementation; the menu engine only requires quads,
/// single-line text, and the ability to render a subtree in the root
/// [`Layer::Overlay`] regardless of where the drawing component lives.
pub trait Renderer {
    /// Draws a filled rectangle.
    fn fill_quad(&mut self, bounds: Rectangle, background: Color);

    /// Draws a single line of text with its top-left corner at `position`.
    fn fill_text(&mut self, content: &str, position: Point, color: Color);

    /// Measures the size of a single line of text.
    fn measure_text(&self, content: &str) -> Size;

    /// Starts recording into the given [`Layer`].
    fn start_layer(&mut self, layer: Layer);

    /// Ends recording into the current [`Layer`].
    fn end_layer(&mut self);

    /// Starts clipping every primitive of the current layer to `bounds`.
    fn start_clip(&mut self, bounds: Rectangle);

    /// Ends the innermost clip.
    fn end_clip(&mut self);

    /// Draws the primitives recorded in the given closure in a new [`Layer`].
    fn with_layer(&mut self, layer: Layer, f: impl FnOnce(&mut Self))
    where
        Self: Sized,
    {
        self.start_layer(layer);
        f(self);
        self.end_layer();
    }

    /// Draws the primitives recorded in the given closure clipped to `bounds`.
    fn with_clip(&mut self, bounds: Rectangle, f: impl FnOnce(&mut Self))
    where
        Self: Sized,
    {
        self.start_clip(bounds);
        f(self);
        self.end_clip();
    }
}

/// A renderer that does nothing.
///
/// Text is measured with a fixed advance per character, which is enough to
/// lay out menus headlessly.
impl Renderer for () {
    fn fill_quad(&mut self, _bounds: Rectangle, _background: Color) {}

    fn fill_text(&mut self, _content: &str, _position: Point, _color: Color) {}

    fn measure_text(&self, content: &str) -> Size {
        Size::new(content.chars().count() as f32 * 8.0, 16.0)
    }

    fn start_layer(&mut self, _layer: Layer) {}

    fn end_layer(&mut self) {}

    fn start_clip(&mut self, _bounds: Rectangle) {}

    fn end_clip(&mut self) {}
}
