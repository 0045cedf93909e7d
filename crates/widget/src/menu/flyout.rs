//! One level of a flyout menu.
use crate::core::menu::MenuNode;
use crate::core::renderer::Layer;
use crate::core::{Point, Rectangle, Size};
use crate::menu::position::{self, AnchorRect, Placement};
use crate::menu::{Appearance, Settings};

const LABEL_PADDING: f32 = 12.0;
const CHEVRON: &str = "›";

/// A panel listing the children of a node, positioned next to the element
/// that opened it.
///
/// A panel is laid out only when it is visible, has at least one item and
/// knows its anchor. Otherwise it renders nothing.
#[derive(Debug, Clone, Copy)]
pub struct FlyoutPanel<'a> {
    items: &'a [MenuNode],
    visible: bool,
    anchor: Option<AnchorRect>,
    placement: Placement,
}

impl<'a> FlyoutPanel<'a> {
    /// Creates a new [`FlyoutPanel`] listing the given items.
    pub fn new(items: &'a [MenuNode]) -> Self {
        Self {
            items,
            visible: true,
            anchor: None,
            placement: Placement::Below,
        }
    }

    /// Sets whether the [`FlyoutPanel`] is visible.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets the [`AnchorRect`] the [`FlyoutPanel`] is opened from.
    #[must_use]
    pub fn anchor(mut self, anchor: impl Into<Option<AnchorRect>>) -> Self {
        self.anchor = anchor.into();
        self
    }

    /// Sets the [`Placement`] of the [`FlyoutPanel`] relative to its anchor.
    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Returns the items of the [`FlyoutPanel`].
    pub fn items(&self) -> &'a [MenuNode] {
        self.items
    }

    /// Computes the bounds of the panel and of each of its rows.
    pub fn layout(&self, viewport: Size, settings: &Settings) -> Option<PanelLayout> {
        if !self.visible || self.items.is_empty() {
            return None;
        }

        let anchor = self.anchor.as_ref()?;

        let width = self.placement.panel_width(anchor, settings);
        let position = position::resolve(anchor, width, self.placement, viewport.width);

        let height =
            settings.row_height * self.items.len() as f32 + settings.panel_padding * 2.0;

        let bounds = Rectangle::new(position.into(), Size::new(width, height));

        let rows = (0..self.items.len())
            .map(|index| {
                Rectangle::new(
                    Point::new(
                        bounds.x,
                        bounds.y + settings.panel_padding + settings.row_height * index as f32,
                    ),
                    Size::new(width, settings.row_height),
                )
            })
            .collect();

        Some(PanelLayout { bounds, rows })
    }

    /// Draws the panel in the overlay layer, above everything else and
    /// outside of any clip of its owner.
    pub fn draw<Renderer>(
        &self,
        renderer: &mut Renderer,
        layout: &PanelLayout,
        hovered: Option<usize>,
        appearance: &Appearance,
    ) where
        Renderer: crate::core::Renderer,
    {
        renderer.with_layer(Layer::Overlay, |renderer| {
            let border = layout.bounds;
            renderer.fill_quad(border, appearance.panel_border);
            renderer.fill_quad(
                Rectangle {
                    x: border.x + 1.0,
                    y: border.y + 1.0,
                    width: (border.width - 2.0).max(0.0),
                    height: (border.height - 2.0).max(0.0),
                },
                appearance.panel_background,
            );

            for (index, (item, row)) in self.items.iter().zip(&layout.rows).enumerate() {
                if hovered == Some(index) {
                    renderer.fill_quad(*row, appearance.path);
                }

                let text = renderer.measure_text(&item.label);
                let y = row.y + (row.height - text.height) / 2.0;

                renderer.fill_text(
                    &item.label,
                    Point::new(row.x + LABEL_PADDING, y),
                    appearance.panel_text,
                );

                if item.is_branch() {
                    let chevron = renderer.measure_text(CHEVRON);

                    renderer.fill_text(
                        CHEVRON,
                        Point::new(row.right() - LABEL_PADDING - chevron.width, y),
                        appearance.panel_text,
                    );
                }
            }
        });
    }
}

/// The computed bounds of a [`FlyoutPanel`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelLayout {
    /// The bounds of the whole panel.
    pub bounds: Rectangle,
    /// The bounds of each row, in item order.
    pub rows: Vec<Rectangle>,
}

impl PanelLayout {
    /// Returns `true` if the panel contains the given [`Point`].
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    /// Returns the index of the row under the given [`Point`], if any.
    pub fn row_at(&self, point: Point) -> Option<usize> {
        self.rows.iter().position(|row| row.contains(point))
    }

    /// Returns the bounds of the row at `index`.
    pub fn row(&self, index: usize) -> Option<Rectangle> {
        self.rows.get(index).copied()
    }
}
