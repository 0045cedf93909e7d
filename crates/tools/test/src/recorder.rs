use vitrine_core::renderer::{Layer, Renderer};
use vitrine_core::{Color, Point, Rectangle, Size};

/// The advance of a character, in logical pixels.
const CHAR_WIDTH: f32 = 8.0;
/// The height of a line of text, in logical pixels.
const LINE_HEIGHT: f32 = 16.0;

/// A drawing primitive captured by a [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    /// The text drawn, or `None` for a quad.
    pub content: Option<String>,
    /// The bounds of the primitive.
    pub bounds: Rectangle,
    /// The color of the primitive.
    pub color: Color,
    /// The layer the primitive was drawn into.
    pub layer: Layer,
    /// The clip in effect when the primitive was drawn, if any.
    pub clip: Option<Rectangle>,
}

impl Primitive {
    /// Returns `true` if some part of the primitive survives its clip.
    pub fn is_visible(&self) -> bool {
        match self.clip {
            None => true,
            Some(clip) => clip.intersection(&self.bounds).is_some(),
        }
    }

    /// Returns `true` if the primitive is text.
    pub fn is_text(&self) -> bool {
        self.content.is_some()
    }
}

/// A [`Renderer`] that records what is drawn instead of rasterizing it.
///
/// Text is measured with a fixed advance per character. Every layer keeps
/// its own stack of clips, and [`Layer::Overlay`] starts with none.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder {
    primitives: Vec<Primitive>,
    layers: Vec<(Layer, Vec<Rectangle>)>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    /// Creates an empty [`Recorder`].
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
            layers: vec![(Layer::Base, Vec::new())],
        }
    }

    /// Returns every recorded primitive, in drawing order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Returns the recorded text primitives, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|primitive| primitive.is_text())
    }

    /// Returns the topmost visible text with the given content.
    pub fn find_text(&self, content: &str) -> Option<&Primitive> {
        self.texts()
            .filter(|primitive| primitive.content.as_deref() == Some(content))
            .filter(|primitive| primitive.is_visible())
            .max_by_key(|primitive| primitive.layer == Layer::Overlay)
    }

    fn current(&self) -> (Layer, Option<Rectangle>) {
        let Some((layer, clips)) = self.layers.last() else {
            return (Layer::Base, None);
        };

        let clip = clips.iter().fold(None, |clip: Option<Rectangle>, bounds| {
            Some(match clip {
                None => *bounds,
                Some(clip) => clip.intersection(bounds).unwrap_or_default(),
            })
        });

        (*layer, clip)
    }

    fn record(&mut self, content: Option<String>, bounds: Rectangle, color: Color) {
        let (layer, clip) = self.current();

        self.primitives.push(Primitive {
            content,
            bounds,
            color,
            layer,
            clip,
        });
    }
}

impl Renderer for Recorder {
    fn fill_quad(&mut self, bounds: Rectangle, background: Color) {
        self.record(None, bounds, background);
    }

    fn fill_text(&mut self, content: &str, position: Point, color: Color) {
        let bounds = Rectangle::new(position, self.measure_text(content));

        self.record(Some(content.to_owned()), bounds, color);
    }

    fn measure_text(&self, content: &str) -> Size {
        Size::new(content.chars().count() as f32 * CHAR_WIDTH, LINE_HEIGHT)
    }

    fn start_layer(&mut self, layer: Layer) {
        let clips = match layer {
            Layer::Base => self
                .layers
                .last()
                .map(|(_, clips)| clips.clone())
                .unwrap_or_default(),
            Layer::Overlay => Vec::new(),
        };

        self.layers.push((layer, clips));
    }

    fn end_layer(&mut self) {
        if self.layers.len() > 1 {
            let _ = self.layers.pop();
        }
    }

    fn start_clip(&mut self, bounds: Rectangle) {
        if let Some((_, clips)) = self.layers.last_mut() {
            clips.push(bounds);
        }
    }

    fn end_clip(&mut self) {
        if let Some((_, clips)) = self.layers.last_mut() {
            let _ = clips.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_ignores_enclosing_clips() {
        let mut recorder = Recorder::new();
        let clip = Rectangle::new(Point::ORIGIN, Size::new(100.0, 50.0));

        recorder.with_clip(clip, |recorder| {
            recorder.fill_text("inline", Point::new(10.0, 100.0), Color::BLACK);

            recorder.with_layer(Layer::Overlay, |recorder| {
                recorder.fill_text("portal", Point::new(10.0, 100.0), Color::BLACK);
            });
        });

        let inline = &recorder.primitives()[0];
        let portal = &recorder.primitives()[1];

        assert_eq!(inline.clip, Some(clip));
        assert!(!inline.is_visible());
        assert_eq!(portal.layer, Layer::Overlay);
        assert_eq!(portal.clip, None);
        assert!(portal.is_visible());
        assert!(recorder.find_text("inline").is_none());
        assert_eq!(recorder.find_text("portal"), Some(portal));
    }

    #[test]
    fn nested_clips_intersect() {
        let mut recorder = Recorder::new();

        recorder.with_clip(Rectangle::new(Point::ORIGIN, Size::new(100.0, 100.0)), |recorder| {
            recorder.with_clip(
                Rectangle::new(Point::new(50.0, 50.0), Size::new(100.0, 100.0)),
                |recorder| recorder.fill_quad(Rectangle::INFINITE, Color::WHITE),
            );
        });

        assert_eq!(
            recorder.primitives()[0].clip,
            Some(Rectangle::new(Point::new(50.0, 50.0), Size::new(50.0, 50.0)))
        );
    }

    #[test]
    fn text_is_measured_per_character() {
        let recorder = Recorder::new();

        assert_eq!(recorder.measure_text("Dizüstü"), Size::new(56.0, 16.0));
    }
}
