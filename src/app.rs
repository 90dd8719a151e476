//! App state and core application logic
//!
//! Owns the catalog and the details builder, feeds the builder on
//! navigation, and routes keyboard input to the details view.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::details::{rating_percentage, Callbacks, DetailsListBuilder, UiItem};
use crate::images::TmdbImageUrlProvider;
use crate::models::{ShowCatalog, ShowRecord};
use crate::property::{ColorDrawable, ColorDrawableProperty, Property};
use crate::resources::Resources;
use crate::ui::{DetailView, Theme};

// =============================================================================
// Click routing
// =============================================================================

/// Collects poster clicks until the app handles them
#[derive(Debug, Default)]
pub struct ClickQueue {
    pending: RefCell<Vec<ShowRecord>>,
}

impl ClickQueue {
    pub fn drain(&self) -> Vec<ShowRecord> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }
}

impl Callbacks for ClickQueue {
    fn on_item_clicked(&self, show: &ShowRecord) {
        log::debug!("poster clicked: {:?}", show.trakt_id);
        self.pending.borrow_mut().push(show.clone());
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Global error message
    pub error: Option<String>,
    /// Source of shows and related-show lists
    pub catalog: ShowCatalog,
    /// Navigation history of trakt ids, current show last
    pub nav_stack: Vec<u64>,
    /// Details screen view state
    pub view: DetailView,
    /// Screen background, tinted per show
    pub backdrop: ColorDrawable,

    builder: DetailsListBuilder,
    clicks: Rc<ClickQueue>,
    items: Vec<UiItem>,
}

impl App {
    pub fn new(
        catalog: ShowCatalog,
        resources: Resources,
        image_provider: TmdbImageUrlProvider,
        columns: u16,
    ) -> Self {
        let clicks = Rc::new(ClickQueue::default());
        let mut builder = DetailsListBuilder::new(resources, clicks.clone());
        builder.set_image_provider(Some(image_provider));

        let mut app = Self {
            running: true,
            error: None,
            catalog,
            nav_stack: Vec::new(),
            view: DetailView::new(columns),
            backdrop: ColorDrawable::new(Theme::BACKDROP_NEUTRAL),
            builder,
            clicks,
            items: Vec::new(),
        };
        app.refresh();
        app
    }

    /// Current item list
    pub fn items(&self) -> &[UiItem] {
        &self.items
    }

    pub fn builder(&self) -> &DetailsListBuilder {
        &self.builder
    }

    pub fn current_id(&self) -> Option<u64> {
        self.nav_stack.last().copied()
    }

    /// Open a show, pushing it onto the navigation stack
    pub fn open_show(&mut self, trakt_id: u64) -> bool {
        if self.catalog.show(trakt_id).is_none() {
            self.set_error(format!("Show {} not found", trakt_id));
            return false;
        }
        if self.current_id() != Some(trakt_id) {
            self.nav_stack.push(trakt_id);
        }
        self.load_current();
        true
    }

    /// Go back to the previous show
    pub fn back(&mut self) -> bool {
        if self.nav_stack.len() <= 1 {
            return false;
        }
        self.nav_stack.pop();
        self.load_current();
        true
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        log::warn!("{}", msg);
        self.error = Some(msg);
    }

    /// Push the current show's data into the builder
    fn load_current(&mut self) {
        let show = self.current_id().and_then(|id| self.catalog.show(id).cloned());
        let related = self.current_id().and_then(|id| self.catalog.related_to(id));

        let tint = Theme::backdrop_for(show.as_ref().and_then(|s| s.rating).map(rating_percentage));
        ColorDrawableProperty.set(&mut self.backdrop, tint);

        self.builder.set_show(show);
        self.builder.set_related_shows(related);
        self.view.reset();
        self.refresh();
    }

    /// Rebuild items if the builder inputs changed
    pub fn refresh(&mut self) {
        match self.builder.take_rebuild() {
            Some(Ok(items)) => {
                self.items = items;
                self.view.clamp(&self.items);
            }
            Some(Err(e)) => {
                // Never leave the previous show's items under the new id
                self.items.clear();
                self.view.reset();
                self.set_error(format!("Could not build details: {}", e));
            }
            None => {}
        }
    }

    /// Click the selected poster and follow any resulting navigation
    pub fn activate_selected(&mut self) -> bool {
        let Some(poster) = self.view.selected(&self.items) else {
            return false;
        };
        poster.click();
        self.process_clicks()
    }

    fn process_clicks(&mut self) -> bool {
        let mut navigated = false;
        for show in self.clicks.drain() {
            if let Some(id) = show.trakt_id {
                navigated |= self.open_show(id);
            }
        }
        navigated
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Clear error on any keypress
        self.error = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                true
            }
            KeyCode::Esc | KeyCode::Backspace => self.back(),
            KeyCode::Left | KeyCode::Char('h') => {
                self.view.left(&self.items);
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.view.right(&self.items);
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.view.up(&self.items);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.view.down(&self.items);
                true
            }
            KeyCode::PageUp => {
                self.view.scroll_up(5);
                true
            }
            KeyCode::PageDown => {
                self.view.scroll_down(5);
                true
            }
            KeyCode::Enter => self.activate_selected(),
            _ => false,
        }
    }
}
