use crate::{Point, Size};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    /// X coordinate of the top-left corner.
    pub x: f32,

    /// Y coordinate of the top-left corner.
    pub y: f32,

    /// Width of the rectangle.
    pub width: f32,

    /// Height of the rectangle.
    pub height: f32,
}

impl Rectangle {
    /// A rectangle starting at [`Point::ORIGIN`] with infinite width and height.
    pub const INFINITE: Self = Self::new(Point::ORIGIN, Size::INFINITY);

    /// Creates a new [`Rectangle`] with its top-left corner in the given
    /// [`Point`] and with the provided [`Size`].
    pub const fn new(top_left: Point, size: Size) -> Self {
        Self {
            x: top_left.x,
            y: top_left.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Creates a new [`Rectangle`] with its top-left corner at the origin
    /// and with the provided [`Size`].
    pub const fn with_size(size: Size) -> Self {
        Self::new(Point::ORIGIN, size)
    }

    /// Returns the position of the top left corner of the [`Rectangle`].
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the [`Size`] of the [`Rectangle`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the [`Point`] at the center of the [`Rectangle`].
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns the X coordinate of the right edge of the [`Rectangle`].
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the Y coordinate of the bottom edge of the [`Rectangle`].
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true if the given [`Point`] is contained in the [`Rectangle`].
    ///
    /// The right and bottom edges are exclusive, so adjacent rectangles never
    /// both contain the same point.
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x
            && point.x < self.x + self.width
            && self.y <= point.y
            && point.y < self.y + self.height
    }

    /// Computes the intersection with the given [`Rectangle`].
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);

        let lower_right_x = self.right().min(other.right());
        let lower_right_y = self.bottom().min(other.bottom());

        let width = lower_right_x - x;
        let height = lower_right_y - y;

        if width > 0.0 && height > 0.0 {
            Some(Rectangle {
                x,
                y,
                width,
                height,
            })
        } else {
            None
        }
    }
}
