//! Dropdown state management
use crate::core::menu::{MenuNode, MenuTree, Path};
use crate::core::{Point, Rectangle, Size};
use crate::menu::flyout::{FlyoutPanel, PanelLayout};
use crate::menu::intent::CloseTimer;
use crate::menu::position::{AnchorRect, Placement};
use crate::menu::Settings;

/// The phase of a top-level item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Phase {
    #[default]
    Closed,
    Open,
}

/// One open panel of the chain of a top-level item.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Level {
    /// The node whose children the panel lists.
    pub(crate) parent: Path,
    pub(crate) anchor: AnchorRect,
    pub(crate) placement: Placement,
    pub(crate) layout: PanelLayout,
    pub(crate) hovered: Option<usize>,
}

impl Level {
    fn new(
        tree: &MenuTree,
        parent: Path,
        anchor: AnchorRect,
        placement: Placement,
        viewport: Size,
        settings: &Settings,
    ) -> Option<Self> {
        let layout = FlyoutPanel::new(tree.children(&parent))
            .anchor(anchor)
            .placement(placement)
            .layout(viewport, settings)?;

        Some(Self {
            parent,
            anchor,
            placement,
            layout,
            hovered: None,
        })
    }

    pub(crate) fn panel<'a>(&self, tree: &'a MenuTree) -> FlyoutPanel<'a> {
        FlyoutPanel::new(tree.children(&self.parent))
            .anchor(self.anchor)
            .placement(self.placement)
    }
}

/// The state of a top-level item and of the chain of panels it opened.
#[derive(Debug, Clone, Default)]
pub(crate) struct ItemState {
    pub(crate) phase: Phase,
    pub(crate) anchor: Option<AnchorRect>,
    pub(crate) levels: Vec<Level>,
    pub(crate) timer: CloseTimer,
    pub(crate) pointer_inside: bool,
}

impl ItemState {
    pub(crate) fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    /// Returns what a frame of the item shows: its phase and the highlighted
    /// row of each open panel.
    pub(crate) fn appearance(&self) -> (Phase, Vec<Option<usize>>) {
        (
            self.phase,
            self.levels.iter().map(|level| level.hovered).collect(),
        )
    }

    /// Opens the first panel below the trigger, measuring it now.
    pub(crate) fn open(
        &mut self,
        tree: &MenuTree,
        root: Path,
        trigger: Rectangle,
        viewport: Size,
        settings: &Settings,
    ) {
        let anchor = AnchorRect::from(trigger);

        self.levels.clear();
        self.levels.extend(Level::new(
            tree,
            root,
            anchor,
            Placement::Below,
            viewport,
            settings,
        ));

        self.anchor = Some(anchor);
        self.phase = Phase::Open;
    }

    /// Closes the item and its whole chain, cancelling any pending close.
    pub(crate) fn close(&mut self) {
        self.phase = Phase::Closed;
        self.anchor = None;
        self.levels.clear();
        let _ = self.timer.cancel();
    }

    /// Forgets every nested panel and hover highlight.
    pub(crate) fn collapse(&mut self) {
        self.levels.truncate(1);

        if let Some(first) = self.levels.first_mut() {
            first.hovered = None;
        }
    }

    /// Returns the index of the deepest open panel under `position`.
    pub(crate) fn level_at(&self, position: Point) -> Option<usize> {
        self.levels
            .iter()
            .rposition(|level| level.layout.contains(position))
    }

    /// Tracks the pointer inside the open chain.
    ///
    /// Hovering a branch row shows its children beside it; hovering anything
    /// else hides the panels past the one under the pointer.
    pub(crate) fn hover(
        &mut self,
        tree: &MenuTree,
        position: Point,
        viewport: Size,
        settings: &Settings,
    ) {
        let Some(depth) = self.level_at(position) else {
            self.collapse();
            return;
        };

        let level = &mut self.levels[depth];
        let row = level.layout.row_at(position);
        level.hovered = row;

        let Some((row, bounds)) = row.and_then(|row| Some((row, level.layout.row(row)?))) else {
            self.levels.truncate(depth + 1);
            return;
        };

        let path = level.parent.child(row);

        if !tree.get(&path).is_some_and(MenuNode::is_branch) {
            self.levels.truncate(depth + 1);
            return;
        }

        if let Some(next) = self.levels.get_mut(depth + 1)
            && next.parent == path
        {
            next.hovered = None;
            self.levels.truncate(depth + 2);
            return;
        }

        self.levels.truncate(depth + 1);

        log::trace!("Flyout {path} shown");

        self.levels.extend(Level::new(
            tree,
            path,
            AnchorRect::from(bounds),
            Placement::Beside,
            viewport,
            settings,
        ));
    }
}
