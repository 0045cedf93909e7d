//! The top-level bar of a desktop menu.
//!
//! Every top-level node of the tree gets a trigger in the bar. Moving the
//! pointer onto a trigger opens its dropdown; leaving the trigger and its
//! panels closes it after [`Settings::close_delay`], unless the pointer
//! comes back first. Nested panels follow the pointer without any delay.
mod state;

use state::ItemState;

use crate::core::menu::{MenuNode, MenuTree, Path};
use crate::core::mouse::{self, Cursor};
use crate::core::time::Instant;
use crate::core::window;
use crate::core::{Event, Point, Rectangle, Shell, Size};
use crate::menu::flyout::PanelLayout;
use crate::menu::position::AnchorRect;
use crate::menu::{Action, Appearance, Settings};

/// A horizontal bar of triggers opening nested flyouts on hover.
#[derive(Debug)]
pub struct DropdownController<'a> {
    tree: &'a MenuTree,
    settings: Settings,
    items: Vec<ItemState>,
    triggers: Vec<Rectangle>,
    bounds: Rectangle,
    viewport: Size,
    cursor: Cursor,
}

impl<'a> DropdownController<'a> {
    /// Creates a new [`DropdownController`] for the given tree.
    pub fn new(tree: &'a MenuTree, settings: Settings) -> Self {
        Self {
            tree,
            settings,
            items: vec![ItemState::default(); tree.roots.len()],
            triggers: Vec::new(),
            bounds: Rectangle::default(),
            viewport: Size::ZERO,
            cursor: Cursor::Unavailable,
        }
    }

    /// Lays out the triggers inside the `bounds` of the bar.
    ///
    /// Open panels keep the position they were given when they opened.
    pub fn layout<Renderer>(&mut self, renderer: &Renderer, bounds: Rectangle, viewport: Size)
    where
        Renderer: crate::core::Renderer,
    {
        let padding = self.settings.trigger_padding;
        let mut x = bounds.x;

        self.triggers = self
            .tree
            .roots
            .iter()
            .map(|root| {
                let width = renderer.measure_text(&root.label).width + padding * 2.0;
                let trigger = Rectangle::new(Point::new(x, bounds.y), Size::new(width, bounds.height));
                x += width;

                trigger
            })
            .collect();

        self.bounds = bounds;
        self.viewport = viewport;
    }

    /// Processes an [`Event`] at the instant `now`.
    pub fn update(&mut self, event: &Event, now: Instant, shell: &mut Shell<'_, Action>) {
        let before: Vec<_> = self.items.iter().map(ItemState::appearance).collect();

        match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor = Cursor::Available(*position);
                self.track(*position, now);
            }
            Event::Mouse(mouse::Event::CursorLeft) | Event::Window(window::Event::Unfocused) => {
                self.cursor = Cursor::Unavailable;
                self.leave_all(now);
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if let Some(position) = self.cursor.position()
                    && self.select(position, shell)
                {
                    shell.capture_event();
                }
            }
            Event::Window(window::Event::RedrawRequested(now)) => {
                self.expire(*now);
            }
            _ => {}
        }

        if self.items.iter().map(ItemState::appearance).ne(before) {
            shell.request_redraw();
        }

        for deadline in self.items.iter().filter_map(|item| item.timer.deadline()) {
            shell.request_redraw_at(deadline);
        }
    }

    /// Closes every dropdown immediately and cancels their pending closes.
    pub fn close_all(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            if item.is_open() {
                log::debug!("Dropdown {:?} closed", self.tree.roots[index].label);
            }

            item.close();
            item.pointer_inside = false;
        }
    }

    /// Returns `true` if the dropdown of the top-level item at `index` is open.
    pub fn is_open(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(ItemState::is_open)
    }

    /// Returns `true` if any dropdown is open.
    pub fn is_any_open(&self) -> bool {
        self.items.iter().any(ItemState::is_open)
    }

    /// Returns the bounds of the trigger of the top-level item at `index`.
    pub fn trigger_bounds(&self, index: usize) -> Option<Rectangle> {
        self.triggers.get(index).copied()
    }

    /// Returns the [`AnchorRect`] measured when the dropdown at `index` opened.
    pub fn anchor(&self, index: usize) -> Option<AnchorRect> {
        self.items.get(index).and_then(|item| item.anchor)
    }

    /// Returns the deadline of the pending close of the item at `index`.
    pub fn pending_close(&self, index: usize) -> Option<Instant> {
        self.items.get(index).and_then(|item| item.timer.deadline())
    }

    /// Returns the open panels of the item at `index`, outermost first,
    /// with the path of the node each of them lists.
    pub fn panels(&self, index: usize) -> impl Iterator<Item = (&Path, &PanelLayout)> + '_ {
        self.items
            .get(index)
            .into_iter()
            .flat_map(|item| item.levels.iter())
            .map(|level| (&level.parent, &level.layout))
    }

    /// Draws the bar in the current layer and the open panels in the overlay.
    pub fn draw<Renderer>(&self, renderer: &mut Renderer, appearance: &Appearance)
    where
        Renderer: crate::core::Renderer,
    {
        renderer.fill_quad(self.bounds, appearance.bar_background);

        for ((root, trigger), item) in self.tree.roots.iter().zip(&self.triggers).zip(&self.items) {
            if item.is_open() {
                renderer.fill_quad(*trigger, appearance.bar_path);
            }

            let text = renderer.measure_text(&root.label);

            renderer.fill_text(
                &root.label,
                Point::new(
                    trigger.x + self.settings.trigger_padding,
                    trigger.y + (trigger.height - text.height) / 2.0,
                ),
                appearance.bar_text,
            );
        }

        for item in self.items.iter().filter(|item| item.is_open()) {
            for level in &item.levels {
                level
                    .panel(self.tree)
                    .draw(renderer, &level.layout, level.hovered, appearance);
            }
        }
    }

    fn track(&mut self, position: Point, now: Instant) {
        let tree = self.tree;
        let owner = self
            .panel_at(position)
            .map(|(index, _)| index)
            .or_else(|| self.trigger_at(position));

        for (index, (item, trigger)) in self.items.iter_mut().zip(&self.triggers).enumerate() {
            let root = &tree.roots[index];

            if owner == Some(index) {
                if !item.pointer_inside {
                    item.pointer_inside = true;

                    if item.timer.cancel() {
                        log::trace!("Dropdown {:?} close cancelled", root.label);
                    }

                    if !item.is_open() && root.is_branch() {
                        item.open(
                            tree,
                            Path::root().child(index),
                            *trigger,
                            self.viewport,
                            &self.settings,
                        );

                        log::debug!("Dropdown {:?} opened", root.label);
                    }
                }

                if item.is_open() {
                    item.hover(tree, position, self.viewport, &self.settings);
                }
            } else if item.pointer_inside {
                leave(item, root, now, &self.settings);
            }
        }
    }

    /// Returns the item and the depth of the topmost panel under `position`.
    ///
    /// Panels are stacked in drawing order: later items above earlier ones,
    /// deeper levels above shallower ones.
    fn panel_at(&self, position: Point) -> Option<(usize, usize)> {
        self.items
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, item)| item.is_open())
            .find_map(|(index, item)| Some((index, item.level_at(position)?)))
    }

    fn trigger_at(&self, position: Point) -> Option<usize> {
        self.triggers
            .iter()
            .position(|trigger| trigger.contains(position))
    }

    fn leave_all(&mut self, now: Instant) {
        for (item, root) in self.items.iter_mut().zip(&self.tree.roots) {
            if item.pointer_inside {
                leave(item, root, now, &self.settings);
            }
        }
    }

    fn expire(&mut self, now: Instant) {
        for (item, root) in self.items.iter_mut().zip(&self.tree.roots) {
            if item.timer.poll(now) {
                item.close();

                log::debug!("Dropdown {:?} closed", root.label);
            }
        }
    }

    /// Handles a click at `position`. Returns `true` if it hit the menu.
    fn select(&mut self, position: Point, shell: &mut Shell<'_, Action>) -> bool {
        let tree = self.tree;

        if let Some((index, depth)) = self.panel_at(position) {
            let item = &mut self.items[index];
            let level = &item.levels[depth];

            let Some(node) = level
                .layout
                .row_at(position)
                .and_then(|row| tree.get(&level.parent.child(row)))
            else {
                return true;
            };

            if !node.is_branch() {
                navigate(node, shell);

                item.close();
                item.pointer_inside = false;

                log::debug!("Dropdown {:?} closed", tree.roots[index].label);
            }

            return true;
        }

        let Some(index) = self.trigger_at(position) else {
            return false;
        };

        let root = &tree.roots[index];

        if !root.is_branch() {
            navigate(root, shell);
        }

        true
    }
}

impl Drop for DropdownController<'_> {
    fn drop(&mut self) {
        for (item, root) in self.items.iter_mut().zip(&self.tree.roots) {
            if item.timer.cancel() {
                log::trace!("Dropdown {:?} close cancelled on teardown", root.label);
            }
        }
    }
}

fn leave(item: &mut ItemState, root: &MenuNode, now: Instant, settings: &Settings) {
    item.pointer_inside = false;
    item.collapse();

    if item.is_open() {
        let deadline = item.timer.schedule(now, settings.close_delay);

        log::trace!("Dropdown {:?} closing at {deadline:?}", root.label);
    }
}

fn navigate(node: &MenuNode, shell: &mut Shell<'_, Action>) {
    log::debug!("Dropdown item {:?} selected", node.label);

    shell.publish(Action::Navigate(node.target.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event;
    use crate::core::menu;
    use crate::core::time::milliseconds;

    fn tree() -> MenuTree {
        MenuTree::new(vec![
            menu::branch!("Bileşenler", "/kategori/Bilesenler", [
                menu::branch!("Depolama", "", [
                    menu::leaf!("SSD", "/ara?q=ssd"),
                    menu::leaf!("HDD", "/ara?q=hdd"),
                ]),
                menu::leaf!("Bellek", "/ara?q=bellek"),
            ]),
            menu::branch!("Çevre Birimleri", "", [menu::leaf!("Klavye", "/ara?q=klavye")]),
            menu::leaf!("Kampanyalar", "/ara?q=kampanya"),
        ])
    }

    fn controller(tree: &MenuTree) -> DropdownController<'_> {
        let mut dropdown = DropdownController::new(tree, Settings::default());
        dropdown.layout(
            &(),
            Rectangle::new(Point::new(0.0, 64.0), Size::new(1280.0, 44.0)),
            Size::new(1280.0, 800.0),
        );
        dropdown
    }

    fn center(bounds: Rectangle) -> Point {
        Point::new(bounds.x + bounds.width / 2.0, bounds.y + bounds.height / 2.0)
    }

    fn send(
        dropdown: &mut DropdownController<'_>,
        event: Event,
        now: Instant,
    ) -> (Vec<Action>, window::RedrawRequest, event::Status) {
        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);

        dropdown.update(&event, now, &mut shell);

        let redraw = shell.redraw_request();
        let status = shell.event_status();
        drop(shell);

        (messages, redraw, status)
    }

    fn moved(position: Point) -> Event {
        Event::Mouse(mouse::Event::CursorMoved { position })
    }

    fn click() -> Event {
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    fn redraw(now: Instant) -> Event {
        Event::Window(window::Event::RedrawRequested(now))
    }

    #[test]
    fn triggers_are_laid_out_in_order() {
        let tree = tree();
        let dropdown = controller(&tree);

        let first = dropdown.trigger_bounds(0).unwrap();
        let second = dropdown.trigger_bounds(1).unwrap();

        assert_eq!(first.x, 0.0);
        assert_eq!(first.width, "Bileşenler".chars().count() as f32 * 8.0 + 32.0);
        assert_eq!(second.x, first.right());
        assert!(dropdown.trigger_bounds(3).is_none());
    }

    #[test]
    fn entering_a_trigger_opens_and_measures_it() {
        let tree = tree();
        let mut dropdown = controller(&tree);
        let now = Instant::now();

        let trigger = dropdown.trigger_bounds(0).unwrap();
        let _ = send(&mut dropdown, moved(center(trigger)), now);

        assert!(dropdown.is_open(0));
        assert_eq!(dropdown.anchor(0), Some(AnchorRect::from(trigger)));
        assert_eq!(dropdown.panels(0).count(), 1);
    }

    #[test]
    fn leaving_schedules_a_delayed_close() {
        let tree = tree();
        let mut dropdown = controller(&tree);
        let now = Instant::now();

        let trigger = dropdown.trigger_bounds(0).unwrap();
        let (_, redraw_request, _) = send(&mut dropdown, moved(center(trigger)), now);
        assert_eq!(redraw_request, window::RedrawRequest::NextFrame);

        let (_, redraw_request, _) = send(&mut dropdown, moved(Point::new(600.0, 700.0)), now);

        let deadline = now + milliseconds(120);
        assert_eq!(redraw_request, window::RedrawRequest::At(deadline));
        assert_eq!(dropdown.pending_close(0), Some(deadline));

        let early = now + milliseconds(119);
        let _ = send(&mut dropdown, redraw(early), early);
        assert!(dropdown.is_open(0));

        let _ = send(&mut dropdown, redraw(deadline), deadline);
        assert!(!dropdown.is_open(0));
        assert_eq!(dropdown.panels(0).count(), 0);
    }

    #[test]
    fn reentering_the_panel_cancels_the_close() {
        let tree = tree();
        let mut dropdown = controller(&tree);
        let now = Instant::now();

        let trigger = dropdown.trigger_bounds(0).unwrap();
        let _ = send(&mut dropdown, moved(center(trigger)), now);
        let _ = send(&mut dropdown, moved(Point::new(600.0, 700.0)), now);

        let panel = dropdown.panels(0).next().unwrap().1.bounds;
        let later = now + milliseconds(60);
        let (_, redraw_request, _) = send(&mut dropdown, moved(center(panel)), later);

        assert_eq!(redraw_request, window::RedrawRequest::NextFrame);
        assert_eq!(dropdown.pending_close(0), None);

        let (_, redraw_request, _) = send(&mut dropdown, redraw(later), later);
        assert_eq!(redraw_request, window::RedrawRequest::Wait);

        let _ = send(&mut dropdown, redraw(now + milliseconds(500)), now + milliseconds(500));
        assert!(dropdown.is_open(0));
    }

    #[test]
    fn selecting_a_nested_leaf_navigates_once_and_closes_the_chain() {
        let tree = tree();
        let mut dropdown = controller(&tree);
        let now = Instant::now();

        let trigger = dropdown.trigger_bounds(0).unwrap();
        let _ = send(&mut dropdown, moved(center(trigger)), now);

        let storage = dropdown.panels(0).next().unwrap().1.rows[0];
        let _ = send(&mut dropdown, moved(center(storage)), now);

        let (path, nested) = dropdown.panels(0).nth(1).unwrap();
        assert_eq!(path, &Path::from(vec![0, 0]));

        let hdd = nested.rows[1];
        let _ = send(&mut dropdown, moved(center(hdd)), now);
        let (messages, _, status) = send(&mut dropdown, click(), now);

        assert_eq!(messages, vec![Action::Navigate("/ara?q=hdd".into())]);
        assert_eq!(status, event::Status::Captured);
        assert!(!dropdown.is_open(0));
        assert_eq!(dropdown.pending_close(0), None);
    }

    #[test]
    fn clicking_a_branch_row_does_not_navigate() {
        let tree = tree();
        let mut dropdown = controller(&tree);
        let now = Instant::now();

        let trigger = dropdown.trigger_bounds(0).unwrap();
        let _ = send(&mut dropdown, moved(center(trigger)), now);

        let storage = dropdown.panels(0).next().unwrap().1.rows[0];
        let _ = send(&mut dropdown, moved(center(storage)), now);
        let (messages, _, status) = send(&mut dropdown, click(), now);

        assert!(messages.is_empty());
        assert_eq!(status, event::Status::Captured);
        assert!(dropdown.is_open(0));
    }

    #[test]
    fn leaf_triggers_navigate_without_opening() {
        let tree = tree();
        let mut dropdown = controller(&tree);
        let now = Instant::now();

        let trigger = dropdown.trigger_bounds(2).unwrap();
        let _ = send(&mut dropdown, moved(center(trigger)), now);

        assert!(!dropdown.is_open(2));
        assert_eq!(dropdown.panels(2).count(), 0);

        let (messages, _, _) = send(&mut dropdown, click(), now);
        assert_eq!(messages, vec![Action::Navigate("/ara?q=kampanya".into())]);
    }

    #[test]
    fn items_keep_independent_timers() {
        let tree = tree();
        let mut dropdown = controller(&tree);
        let now = Instant::now();

        let first = dropdown.trigger_bounds(0).unwrap();
        let second = dropdown.trigger_bounds(1).unwrap();

        let _ = send(&mut dropdown, moved(center(first)), now);
        let _ = send(&mut dropdown, moved(center(second)), now + milliseconds(10));

        assert!(dropdown.is_open(0));
        assert!(dropdown.is_open(1));
        assert_eq!(dropdown.pending_close(0), Some(now + milliseconds(130)));
        assert_eq!(dropdown.pending_close(1), None);

        let _ = send(&mut dropdown, redraw(now + milliseconds(130)), now + milliseconds(130));

        assert!(!dropdown.is_open(0));
        assert!(dropdown.is_open(1));
    }

    #[test]
    fn the_topmost_panel_owns_the_pointer() {
        let tree = tree();
        let mut dropdown = controller(&tree);
        let now = Instant::now();

        let first = dropdown.trigger_bounds(0).unwrap();
        let second = dropdown.trigger_bounds(1).unwrap();

        let _ = send(&mut dropdown, moved(center(first)), now);
        let _ = send(&mut dropdown, moved(center(second)), now);

        let keyboard = dropdown.panels(1).next().unwrap().1.rows[0];
        let overlap = Point::new(150.0, center(keyboard).y);
        assert!(dropdown.panels(0).next().unwrap().1.contains(overlap));

        let later = now + milliseconds(10);
        let _ = send(&mut dropdown, moved(overlap), later);

        assert_eq!(dropdown.pending_close(0), Some(now + milliseconds(120)));

        let (messages, _, _) = send(&mut dropdown, click(), later);
        assert_eq!(messages, vec![Action::Navigate("/ara?q=klavye".into())]);

        let deadline = now + milliseconds(120);
        let _ = send(&mut dropdown, redraw(deadline), deadline);
        assert!(!dropdown.is_any_open());
    }

    #[test]
    fn cursor_leaving_the_window_schedules_closes() {
        let tree = tree();
        let mut dropdown = controller(&tree);
        let now = Instant::now();

        let trigger = dropdown.trigger_bounds(1).unwrap();
        let _ = send(&mut dropdown, moved(center(trigger)), now);
        let _ = send(&mut dropdown, Event::Mouse(mouse::Event::CursorLeft), now);

        assert_eq!(dropdown.pending_close(1), Some(now + milliseconds(120)));
    }

    #[test]
    fn close_all_cancels_pending_closes() {
        let tree = tree();
        let mut dropdown = controller(&tree);
        let now = Instant::now();

        let trigger = dropdown.trigger_bounds(0).unwrap();
        let _ = send(&mut dropdown, moved(center(trigger)), now);
        let _ = send(&mut dropdown, moved(Point::new(600.0, 700.0)), now);

        dropdown.close_all();

        assert!(!dropdown.is_any_open());
        assert_eq!(dropdown.pending_close(0), None);
    }
}
