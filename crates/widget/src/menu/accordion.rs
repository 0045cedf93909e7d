//! Expand and collapse a menu tree in place.
use rustc_hash::FxHashSet;

use crate::core::menu::{MenuNode, MenuTree, Path};
use crate::core::mouse::{self, Cursor};
use crate::core::{Event, Point, Rectangle, Shell, Size, SmolStr, touch};
use crate::menu::{Action, Appearance, Settings};

const LABEL_PADDING: f32 = 16.0;
/// How far a finger travels before a touch becomes a scroll instead of a tap.
const DRAG_THRESHOLD: f32 = 8.0;

/// A vertical list of the nodes of a tree where every branch can be
/// expanded to show its children below it.
///
/// The expanded state lives as long as the controller. Dropping it and
/// creating a new one starts over with every node collapsed.
///
/// Rows that do not fit in the bounds of the controller are reached by
/// scrolling, either with the mouse wheel or by dragging a finger.
#[derive(Debug)]
pub struct AccordionController<'a> {
    tree: &'a MenuTree,
    settings: Settings,
    expanded: FxHashSet<Path>,
    rows: Vec<AccordionRow>,
    bounds: Rectangle,
    content_height: f32,
    offset: f32,
    cursor: Cursor,
    drag: Option<Drag>,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    finger: touch::Finger,
    origin: Point,
    last: Point,
    scrolling: bool,
}

/// A visible row of an [`AccordionController`].
#[derive(Debug, Clone, PartialEq)]
pub struct AccordionRow {
    /// The path of the node of the row.
    pub path: Path,
    /// The label of the node.
    pub label: SmolStr,
    /// The nesting level of the row; top-level nodes are at depth 0.
    pub depth: usize,
    /// The bounds of the whole row.
    pub bounds: Rectangle,
    /// The bounds of the expand affordance, for branches only.
    pub toggle: Option<Rectangle>,
}

impl<'a> AccordionController<'a> {
    /// Creates a new [`AccordionController`] with every node collapsed.
    pub fn new(tree: &'a MenuTree, settings: Settings) -> Self {
        Self {
            tree,
            settings,
            expanded: FxHashSet::default(),
            rows: Vec::new(),
            bounds: Rectangle::default(),
            content_height: 0.0,
            offset: 0.0,
            cursor: Cursor::Unavailable,
            drag: None,
        }
    }

    /// Lays out the visible rows inside `bounds`, shifted by the scroll
    /// offset.
    ///
    /// The offset is clamped to the new content. Returns the total height of
    /// the rows.
    pub fn layout(&mut self, bounds: Rectangle) -> f32 {
        self.bounds = bounds;
        self.rows.clear();

        let tree = self.tree;
        let mut y = bounds.y;
        self.layout_level(&tree.roots, &Path::root(), 0, &mut y);

        self.content_height = y - bounds.y;
        self.offset = self.offset.clamp(0.0, self.max_offset());

        for row in &mut self.rows {
            row.bounds.y -= self.offset;

            if let Some(toggle) = &mut row.toggle {
                toggle.y -= self.offset;
            }
        }

        self.content_height
    }

    fn layout_level(&mut self, nodes: &'a [MenuNode], parent: &Path, depth: usize, y: &mut f32) {
        let height = self.settings.accordion_row_height;

        for (index, node) in nodes.iter().enumerate() {
            let path = parent.child(index);
            let bounds = Rectangle::new(
                Point::new(self.bounds.x, *y),
                Size::new(self.bounds.width, height),
            );

            let toggle = node.is_branch().then(|| {
                let width = self.settings.toggle_width.min(bounds.width);

                Rectangle::new(
                    Point::new(bounds.right() - width, bounds.y),
                    Size::new(width, height),
                )
            });

            *y += height;

            let expanded = node.is_branch() && self.expanded.contains(&path);

            self.rows.push(AccordionRow {
                path: path.clone(),
                label: node.label.clone(),
                depth,
                bounds,
                toggle,
            });

            if expanded {
                self.layout_level(&node.children, &path, depth + 1, y);
            }
        }
    }

    /// Processes an [`Event`].
    ///
    /// A tap is either a released left button or a finger lifted without
    /// dragging. The wheel and finger drags scroll the rows.
    pub fn update(&mut self, event: &Event, shell: &mut Shell<'_, Action>) {
        match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor = Cursor::Available(*position);
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                self.cursor = Cursor::Unavailable;
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if !self.cursor.is_over(self.bounds) {
                    return;
                }

                let y = match *delta {
                    mouse::ScrollDelta::Lines { y, .. } => y * self.settings.accordion_row_height,
                    mouse::ScrollDelta::Pixels { y, .. } => y,
                };

                if self.scroll_by(-y) {
                    shell.request_redraw();
                }

                shell.capture_event();
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if let Some(position) = self.cursor.position() {
                    self.tap(position, shell);
                }
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                self.drag = self.bounds.contains(*position).then_some(Drag {
                    finger: *id,
                    origin: *position,
                    last: *position,
                    scrolling: false,
                });
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                let Some(drag) = self.drag.as_mut().filter(|drag| drag.finger == *id) else {
                    return;
                };

                if !drag.scrolling && (position.y - drag.origin.y).abs() < DRAG_THRESHOLD {
                    return;
                }

                let delta = drag.last.y - position.y;
                drag.scrolling = true;
                drag.last = *position;

                if self.scroll_by(delta) {
                    shell.request_redraw();
                }

                shell.capture_event();
            }
            Event::Touch(touch::Event::FingerLifted { id, position }) => match self.drag.take() {
                Some(drag) if drag.finger == *id && drag.scrolling => shell.capture_event(),
                _ => self.tap(*position, shell),
            },
            Event::Touch(touch::Event::FingerLost { .. }) => {
                self.drag = None;
            }
            _ => {}
        }
    }

    /// Scrolls the rows by `delta` pixels; positive values reveal the rows
    /// further down.
    ///
    /// Returns whether the offset changed.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        let offset = (self.offset + delta).clamp(0.0, self.max_offset());

        if offset == self.offset {
            return false;
        }

        log::trace!("Accordion scrolled to {offset}");

        self.offset = offset;
        let _ = self.layout(self.bounds);

        true
    }

    /// Returns the current scroll offset.
    pub fn scroll_offset(&self) -> f32 {
        self.offset
    }

    /// Returns the largest scroll offset of the current content.
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.bounds.height).max(0.0)
    }

    /// Returns the bounds the rows are clipped to.
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Handles a tap at `position`.
    ///
    /// Tapping the toggle of a branch, or anywhere on a branch without a
    /// target, flips it. Tapping anything else navigates to the target of
    /// the row, asks the owner to close, and collapses every node.
    pub fn tap(&mut self, position: Point, shell: &mut Shell<'_, Action>) {
        let tree = self.tree;

        if !self.bounds.contains(position) {
            return;
        }

        let Some(row) = self.rows.iter().find(|row| row.bounds.contains(position)) else {
            return;
        };

        let Some(node) = tree.get(&row.path) else {
            return;
        };

        shell.capture_event();
        shell.request_redraw();

        let on_toggle = row.toggle.is_some_and(|toggle| toggle.contains(position));

        if node.is_branch() && (on_toggle || !node.is_navigable()) {
            let path = row.path.clone();
            let _ = self.toggle(&path);

            shell.invalidate_layout();
            return;
        }

        log::debug!("Accordion {} selected", row.path);

        shell.publish(Action::Navigate(node.target.clone()));
        shell.publish(Action::Close);

        self.collapse_all();
    }

    /// Flips the expanded state of the branch at `path`.
    ///
    /// Collapsing a branch also collapses all of its descendants. Returns
    /// whether the branch is expanded afterwards.
    pub fn toggle(&mut self, path: &Path) -> bool {
        if !self.tree.get(path).is_some_and(MenuNode::is_branch) {
            return false;
        }

        let expanded = if self.expanded.remove(path) {
            self.expanded.retain(|other| !other.starts_with(path));

            false
        } else {
            let _ = self.expanded.insert(path.clone());

            true
        };

        log::trace!(
            "Accordion {path} {}",
            if expanded { "expanded" } else { "collapsed" }
        );

        let _ = self.layout(self.bounds);

        expanded
    }

    /// Collapses every node and scrolls back to the top.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.offset = 0.0;
        let _ = self.layout(self.bounds);
    }

    /// Returns `true` if the branch at `path` is expanded.
    pub fn is_expanded(&self, path: &Path) -> bool {
        self.expanded.contains(path)
    }

    /// Returns the visible rows, in display order.
    pub fn rows(&self) -> &[AccordionRow] {
        &self.rows
    }

    /// Returns the visible row of the node at `path`, if any.
    pub fn row(&self, path: &Path) -> Option<&AccordionRow> {
        self.rows.iter().find(|row| &row.path == path)
    }

    /// Draws the visible rows in the current layer, clipped to the bounds of
    /// the controller.
    pub fn draw<Renderer>(&self, renderer: &mut Renderer, appearance: &Appearance)
    where
        Renderer: crate::core::Renderer,
    {
        renderer.with_clip(self.bounds, |renderer| self.draw_rows(renderer, appearance));
    }

    fn draw_rows<Renderer>(&self, renderer: &mut Renderer, appearance: &Appearance)
    where
        Renderer: crate::core::Renderer,
    {
        for row in &self.rows {
            for level in 1..=row.depth {
                renderer.fill_quad(
                    Rectangle {
                        x: row.bounds.x + self.settings.indent * level as f32,
                        y: row.bounds.y,
                        width: 1.0,
                        height: row.bounds.height,
                    },
                    appearance.indent_marker,
                );
            }

            let text = renderer.measure_text(&row.label);
            let y = row.bounds.y + (row.bounds.height - text.height) / 2.0;

            renderer.fill_text(
                &row.label,
                Point::new(
                    row.bounds.x + LABEL_PADDING + self.settings.indent * row.depth as f32,
                    y,
                ),
                appearance.drawer_text,
            );

            if let Some(toggle) = row.toggle {
                let glyph = if self.is_expanded(&row.path) { "−" } else { "+" };
                let size = renderer.measure_text(glyph);

                renderer.fill_text(
                    glyph,
                    Point::new(toggle.x + (toggle.width - size.width) / 2.0, y),
                    appearance.drawer_text,
                );
            }
        }
    }
}
