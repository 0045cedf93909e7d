//! Bind a menu tree to the viewport.
use crate::core::menu::MenuTree;
use crate::core::mouse::{self, Cursor};
use crate::core::navigation::{self, Router};
use crate::core::renderer::Layer;
use crate::core::time::Instant;
use crate::core::{Color, Event, Point, Rectangle, Shell, Size, event, touch, window};
use crate::menu::{AccordionController, Action, Appearance, DropdownController, SearchForm, Settings};

const SPACING: f32 = 16.0;
const CONTROL_HEIGHT: f32 = 40.0;
const SEARCH_WIDTH: f32 = 480.0;
const SEARCH_BUTTON_WIDTH: f32 = 48.0;

const MENU_GLYPH: &str = "☰";
const HOME_LABEL: &str = "Ana Sayfa";
const SEARCH_LABEL: &str = "Ara";
const SEARCH_PLACEHOLDER: &str = "Ürün veya kategori ara";

/// How a [`MenuShell`] presents its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// A bar of dropdowns, for wide viewports.
    Desktop,
    /// A drawer holding an accordion, for narrow viewports.
    Mobile,
}

impl Presentation {
    /// Returns the [`Presentation`] used for a viewport of the given width.
    pub fn for_width(width: f32, settings: &Settings) -> Self {
        if width >= settings.breakpoint {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }
}

/// The outcome of [`MenuShell::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Update {
    /// Whether the menu handled the event.
    pub status: event::Status,
    /// When the host should deliver the next
    /// [`RedrawRequested`](window::Event::RedrawRequested) event.
    pub redraw_request: window::RedrawRequest,
    /// Whether [`MenuShell::layout`] must run before the next draw.
    pub layout_invalid: bool,
}

/// The navigation menu of the catalog.
///
/// Wide viewports get a [`DropdownController`]; narrow ones get a menu
/// button opening a drawer with an [`AccordionController`]. The shell also
/// owns the search form, and hands every selected target to its [`Router`].
#[derive(Debug)]
pub struct MenuShell<'a, R> {
    tree: &'a MenuTree,
    router: R,
    settings: Settings,
    appearance: Appearance,
    viewport: Size,
    presentation: Presentation,
    header: Header,
    dropdown: DropdownController<'a>,
    drawer: Option<Drawer<'a>>,
    search: SearchForm,
    cursor: Cursor,
}

impl<'a, R> MenuShell<'a, R>
where
    R: Router,
{
    /// Creates a [`MenuShell`] for the given tree with the default
    /// [`Settings`].
    pub fn new(tree: &'a MenuTree, router: R) -> Self {
        Self::with_settings(tree, router, Settings::default())
    }

    /// Creates a [`MenuShell`] for the given tree with custom [`Settings`].
    pub fn with_settings(tree: &'a MenuTree, router: R, settings: Settings) -> Self {
        Self {
            tree,
            router,
            settings,
            appearance: Appearance::default(),
            viewport: Size::ZERO,
            presentation: Presentation::for_width(0.0, &settings),
            header: Header::default(),
            dropdown: DropdownController::new(tree, settings),
            drawer: None,
            search: SearchForm::new(),
            cursor: Cursor::Unavailable,
        }
    }

    /// Sets the [`Appearance`] of the [`MenuShell`].
    #[must_use]
    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Lays out the menu for the given viewport.
    pub fn layout<Renderer>(&mut self, renderer: &Renderer, viewport: Size)
    where
        Renderer: crate::core::Renderer,
    {
        let _ = self.resize(viewport);

        self.header = Header::new(viewport, self.presentation, &self.settings);
        self.dropdown.layout(renderer, self.header.bar, viewport);
    }

    /// Processes an [`Event`] at the instant `now`.
    pub fn update(&mut self, event: &Event, now: Instant) -> Update {
        match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor = Cursor::Available(*position);
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                self.cursor = Cursor::Unavailable;
            }
            _ => {}
        }

        let mut actions = Vec::new();
        let mut shell = Shell::new(&mut actions);

        match (event, self.presentation) {
            (Event::Window(window::Event::Resized(viewport)), _) => {
                let _ = self.resize(*viewport);

                shell.invalidate_layout();
                shell.request_redraw();
            }
            (_, Presentation::Desktop) => self.update_desktop(event, now, &mut shell),
            (_, Presentation::Mobile) => self.update_mobile(event, &mut shell),
        }

        let mut update = Update {
            status: shell.event_status(),
            redraw_request: shell.redraw_request(),
            layout_invalid: shell.is_layout_invalid(),
        };

        drop(shell);

        for action in actions {
            match action {
                Action::Navigate(target) => self.navigate(&target),
                Action::Close => {
                    self.close_drawer();
                    update.layout_invalid = true;
                }
            }

            update.redraw_request = window::RedrawRequest::NextFrame;
        }

        update
    }

    fn update_desktop(&mut self, event: &Event, now: Instant, shell: &mut Shell<'_, Action>) {
        if matches!(
            event,
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        ) && self.cursor.is_over(self.header.search_button)
        {
            let _ = self.search_submit();

            shell.capture_event();
            shell.request_redraw();
            return;
        }

        self.dropdown.update(event, now, shell);
    }

    fn update_mobile(&mut self, event: &Event, shell: &mut Shell<'_, Action>) {
        let position = match event {
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.cursor.position()
            }
            Event::Touch(touch::Event::FingerLifted { position, .. }) => Some(*position),
            _ => None,
        };

        let Some(drawer) = &mut self.drawer else {
            if position.is_some_and(|position| self.header.menu_button.contains(position)) {
                self.open_drawer();

                shell.capture_event();
                shell.invalidate_layout();
                shell.request_redraw();
            }

            return;
        };

        drawer.accordion.update(event, shell);

        let Some(position) = position else {
            return;
        };

        if shell.is_event_captured() {
            return;
        }

        // The drawer is modal: every tap belongs to it or to its scrim.
        shell.capture_event();
        shell.request_redraw();

        if !drawer.layout.bounds.contains(position) {
            self.close_drawer();
            shell.invalidate_layout();
        } else if drawer.layout.search_button.contains(position) {
            let _ = self.search_submit();
        } else if drawer.layout.home.contains(position) {
            shell.publish(Action::Navigate(navigation::HOME.into()));
            shell.publish(Action::Close);
        }
    }

    fn resize(&mut self, viewport: Size) -> bool {
        self.viewport = viewport;

        if let Some(drawer) = &mut self.drawer {
            drawer.layout(viewport, &self.settings);
        }

        let presentation = Presentation::for_width(viewport.width, &self.settings);

        if presentation == self.presentation {
            return false;
        }

        log::debug!("Switching to {presentation:?} presentation");

        match presentation {
            Presentation::Desktop => self.close_drawer(),
            Presentation::Mobile => self.dropdown.close_all(),
        }

        self.presentation = presentation;

        true
    }

    fn navigate(&mut self, target: &str) {
        log::debug!("Navigating to {target:?}");

        self.router.navigate(target);
    }

    /// Replaces the value of the search input.
    pub fn search_input(&mut self, value: impl Into<String>) {
        self.search.input(value);
    }

    /// Returns the value of the search input.
    pub fn search_value(&self) -> &str {
        self.search.value()
    }

    /// Submits the search form.
    ///
    /// A blank query is ignored. Otherwise the shell navigates to the search
    /// results, clears the input and closes the drawer if it is open.
    /// Returns whether a navigation happened.
    pub fn search_submit(&mut self) -> bool {
        let Some(target) = self.search.submit() else {
            log::trace!("Ignoring blank search");
            return false;
        };

        self.navigate(&target);
        self.close_drawer();

        true
    }

    /// Opens the mobile drawer with every accordion node collapsed.
    ///
    /// Does nothing on the desktop presentation.
    pub fn open_drawer(&mut self) {
        if self.presentation != Presentation::Mobile || self.drawer.is_some() {
            return;
        }

        let mut drawer = Drawer {
            accordion: AccordionController::new(self.tree, self.settings),
            layout: DrawerLayout::default(),
        };

        drawer.layout(self.viewport, &self.settings);

        self.drawer = Some(drawer);

        log::debug!("Drawer opened");
    }

    /// Closes the mobile drawer, discarding the state of its accordion.
    pub fn close_drawer(&mut self) {
        if self.drawer.take().is_some() {
            log::debug!("Drawer closed");
        }
    }

    /// Opens the drawer if it is closed, and closes it otherwise.
    pub fn toggle_drawer(&mut self) {
        if self.drawer.is_some() {
            self.close_drawer();
        } else {
            self.open_drawer();
        }
    }

    /// Returns `true` if the mobile drawer is open.
    pub fn is_drawer_open(&self) -> bool {
        self.drawer.is_some()
    }

    /// Returns the current [`Presentation`].
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// Returns the [`Settings`] of the [`MenuShell`].
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the [`DropdownController`] of the desktop presentation.
    pub fn dropdown(&self) -> &DropdownController<'a> {
        &self.dropdown
    }

    /// Returns the [`AccordionController`] of the drawer, if it is open.
    pub fn accordion(&self) -> Option<&AccordionController<'a>> {
        self.drawer.as_ref().map(|drawer| &drawer.accordion)
    }

    /// Returns the bounds of the button opening the drawer.
    pub fn menu_button(&self) -> Rectangle {
        self.header.menu_button
    }

    /// Returns the bounds of the drawer, if it is open.
    pub fn drawer_bounds(&self) -> Option<Rectangle> {
        self.drawer.as_ref().map(|drawer| drawer.layout.bounds)
    }

    /// Returns the bounds of the active search button.
    pub fn search_button(&self) -> Rectangle {
        self.drawer
            .as_ref()
            .map_or(self.header.search_button, |drawer| drawer.layout.search_button)
    }

    /// Returns the [`Router`] of the [`MenuShell`].
    pub fn router(&self) -> &R {
        &self.router
    }

    /// Returns a mutable reference to the [`Router`] of the [`MenuShell`].
    pub fn router_mut(&mut self) -> &mut R {
        &mut self.router
    }

    /// Consumes the [`MenuShell`] and returns its [`Router`].
    pub fn into_router(self) -> R {
        self.router
    }

    /// Draws the menu.
    ///
    /// The header and the bar are drawn in the current layer; flyouts and
    /// the drawer are drawn in the overlay.
    pub fn draw<Renderer>(&self, renderer: &mut Renderer)
    where
        Renderer: crate::core::Renderer,
    {
        let appearance = &self.appearance;

        renderer.fill_quad(self.header.bounds, appearance.header_background);

        match self.presentation {
            Presentation::Desktop => {
                self.draw_search(renderer, self.header.search_field, self.header.search_button);
                self.dropdown.draw(renderer, appearance);
            }
            Presentation::Mobile => {
                draw_label(renderer, MENU_GLYPH, self.header.menu_button, appearance.bar_text);

                let Some(drawer) = &self.drawer else {
                    return;
                };

                renderer.with_layer(Layer::Overlay, |renderer| {
                    renderer.fill_quad(Rectangle::with_size(self.viewport), appearance.scrim);
                    renderer.fill_quad(drawer.layout.bounds, appearance.drawer_background);

                    self.draw_search(
                        renderer,
                        drawer.layout.search_field,
                        drawer.layout.search_button,
                    );

                    let home = drawer.layout.home;
                    let text = renderer.measure_text(HOME_LABEL);

                    renderer.fill_text(
                        HOME_LABEL,
                        Point::new(home.x + SPACING, home.y + (home.height - text.height) / 2.0),
                        appearance.drawer_text,
                    );

                    drawer.accordion.draw(renderer, appearance);
                });
            }
        }
    }

    fn draw_search<Renderer>(&self, renderer: &mut Renderer, field: Rectangle, button: Rectangle)
    where
        Renderer: crate::core::Renderer,
    {
        let appearance = &self.appearance;

        renderer.fill_quad(field, appearance.search_background);

        let (content, color) = if self.search.value().is_empty() {
            (SEARCH_PLACEHOLDER, appearance.search_placeholder)
        } else {
            (self.search.value(), appearance.search_text)
        };

        let input = Rectangle {
            width: (field.width - button.width).max(0.0),
            ..field
        };

        renderer.with_clip(input, |renderer| {
            let text = renderer.measure_text(content);

            renderer.fill_text(
                content,
                Point::new(
                    input.x + SPACING / 2.0,
                    input.y + (input.height - text.height) / 2.0,
                ),
                color,
            );
        });

        renderer.fill_quad(button, appearance.search_button);
        draw_label(renderer, SEARCH_LABEL, button, appearance.bar_text);
    }
}

fn draw_label<Renderer>(
    renderer: &mut Renderer,
    content: &str,
    bounds: Rectangle,
    color: Color,
) where
    Renderer: crate::core::Renderer,
{
    let text = renderer.measure_text(content);

    renderer.fill_text(
        content,
        Point::new(
            bounds.x + (bounds.width - text.width) / 2.0,
            bounds.y + (bounds.height - text.height) / 2.0,
        ),
        color,
    );
}

/// The bounds of the controls of the header.
#[derive(Debug, Clone, Copy, Default)]
struct Header {
    bounds: Rectangle,
    bar: Rectangle,
    menu_button: Rectangle,
    search_field: Rectangle,
    search_button: Rectangle,
}

impl Header {
    fn new(viewport: Size, presentation: Presentation, settings: &Settings) -> Self {
        let bounds = Rectangle::with_size(Size::new(viewport.width, settings.header_height));
        let y = (settings.header_height - CONTROL_HEIGHT) / 2.0;

        match presentation {
            Presentation::Desktop => {
                let width = SEARCH_WIDTH.min(viewport.width - SPACING * 2.0).max(0.0);
                let search_field = Rectangle::new(
                    Point::new((viewport.width - width) / 2.0, y),
                    Size::new(width, CONTROL_HEIGHT),
                );

                Self {
                    bounds,
                    bar: Rectangle::new(
                        Point::new(0.0, settings.header_height),
                        Size::new(viewport.width, settings.bar_height),
                    ),
                    menu_button: Rectangle::default(),
                    search_field,
                    search_button: search_button(search_field),
                }
            }
            Presentation::Mobile => Self {
                bounds,
                menu_button: Rectangle::new(
                    Point::new(SPACING / 2.0, y),
                    Size::new(CONTROL_HEIGHT, CONTROL_HEIGHT),
                ),
                ..Self::default()
            },
        }
    }
}

fn search_button(field: Rectangle) -> Rectangle {
    let width = SEARCH_BUTTON_WIDTH.min(field.width);

    Rectangle::new(
        Point::new(field.right() - width, field.y),
        Size::new(width, field.height),
    )
}

/// The mobile drawer.
#[derive(Debug)]
struct Drawer<'a> {
    accordion: AccordionController<'a>,
    layout: DrawerLayout,
}

#[derive(Debug, Clone, Copy, Default)]
struct DrawerLayout {
    bounds: Rectangle,
    search_field: Rectangle,
    search_button: Rectangle,
    home: Rectangle,
}

impl Drawer<'_> {
    fn layout(&mut self, viewport: Size, settings: &Settings) {
        let width = settings.drawer_width.min(viewport.width);
        let bounds = Rectangle::with_size(Size::new(width, viewport.height));

        let search_field = Rectangle::new(
            Point::new(SPACING, SPACING),
            Size::new((width - SPACING * 2.0).max(0.0), CONTROL_HEIGHT),
        );

        let home = Rectangle::new(
            Point::new(0.0, search_field.bottom() + SPACING),
            Size::new(width, settings.accordion_row_height),
        );

        let _ = self.accordion.layout(Rectangle::new(
            Point::new(0.0, home.bottom()),
            Size::new(width, (viewport.height - home.bottom()).max(0.0)),
        ));

        self.layout = DrawerLayout {
            bounds,
            search_field,
            search_button: search_button(search_field),
            home,
        };
    }
}
