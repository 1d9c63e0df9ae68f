//! Application state: the catalog view-model and the controllers acting on it.

pub mod forms;

use folio_core::{Book, Catalog, CatalogStore, ColorTokens, FilterCriteria, ThemeName};
use ratatui::layout::Rect;
use tracing::debug;

pub use forms::{FormData, SearchField, SearchForm, SelectControl, SettingsForm};

pub use folio_core::NO_RESULTS_MESSAGE;

/// Application state
///
/// Built once by [`AppState::bootstrap`] and passed by reference to every
/// handler.
pub struct AppState {
    /// Dataset plus matches/page
    pub store: CatalogStore,
    /// Rendered list items
    pub list: ListView,
    /// "Show more" button
    pub show_more: ShowMoreButton,
    /// Search overlay and its form
    pub search: SearchOverlay,
    /// Settings overlay and its form
    pub settings: SettingsOverlay,
    /// Book detail overlay
    pub detail: DetailOverlay,
    /// Active theme and its color tokens
    pub theme: ThemeState,
    /// Layout bookkeeping
    pub ui: UiState,
    /// Whether to quit
    pub should_quit: bool,
}

impl AppState {
    /// Initialize theme, dropdowns, the first page and the pager button, in that order.
    pub fn bootstrap(store: CatalogStore, theme: ThemeName) -> Self {
        let mut app = Self {
            store,
            list: ListView::new(),
            show_more: ShowMoreButton::default(),
            search: SearchOverlay::new(),
            settings: SettingsOverlay::new(),
            detail: DetailOverlay::new(),
            theme: ThemeState::default(),
            ui: UiState::new(),
            should_quit: false,
        };

        app.apply_theme(theme);
        app.populate_dropdowns();
        app.list.message_visible = !app.store.has_matches();
        app.render_first_page();
        app.update_show_more();

        debug!(
            books = app.store.catalog().books.len(),
            page_size = app.store.page_size(),
            theme = %theme,
            "bootstrapped"
        );
        app
    }

    fn populate_dropdowns(&mut self) {
        let catalog = self.store.catalog();
        self.search.form.genre.populate("All Genres", &catalog.genres);
        self.search.form.author.populate("All Authors", &catalog.authors);
    }

    fn render_first_page(&mut self) {
        let books = self.store.first_page();
        self.list.render(&books, self.store.catalog());
    }

    fn update_show_more(&mut self) {
        self.show_more.update(self.store.remaining());
    }

    /// Set both color tokens and reflect `theme` into the settings control.
    pub fn apply_theme(&mut self, theme: ThemeName) {
        self.theme.apply(theme);
        self.settings.form.theme.set_value(theme.as_str());
        debug!(theme = %theme, "applied theme");
    }

    pub fn open_search(&mut self) {
        self.search.overlay.open();
        self.search.form.focus = SearchField::Title;
    }

    pub fn close_search(&mut self) {
        self.search.overlay.close();
    }

    pub fn open_settings(&mut self) {
        self.settings.overlay.open();
    }

    pub fn close_settings(&mut self) {
        self.settings.overlay.close();
    }

    /// Filter, redraw the list from page one and close the search overlay.
    pub fn submit_search(&mut self, data: &FormData) {
        let criteria =
            FilterCriteria::from_fields(data.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        self.store.apply_filter(&criteria);

        self.list.message_visible = !self.store.has_matches();
        self.list.clear();
        self.render_first_page();
        self.update_show_more();
        self.ui.scroll_to_top();
        self.close_search();
    }

    /// Append the next page. Does nothing while the button is disabled.
    pub fn show_more(&mut self) {
        if self.show_more.disabled {
            return;
        }

        let books = self.store.next_page();
        self.list.render(&books, self.store.catalog());
        self.store.advance();
        self.update_show_more();
    }

    /// Open the detail overlay for `id`. Unknown ids leave everything as is.
    pub fn select_preview(&mut self, id: &str) -> bool {
        let Some(book) = self.store.find(id) else {
            debug!(id, "preview lookup missed");
            return false;
        };

        self.detail.content = DetailContent::from_book(book, self.store.catalog());
        self.detail.overlay.open();
        true
    }

    pub fn close_detail(&mut self) {
        self.detail.overlay.close();
    }

    /// Apply the submitted theme and close the settings overlay.
    pub fn submit_settings(&mut self, data: &FormData) {
        let value = data.get("theme").map(String::as_str).unwrap_or("");
        self.apply_theme(ThemeName::from_submitted(value));
        self.close_settings();
    }

    /// Id of the highlighted list item.
    pub fn selected_id(&self) -> Option<&str> {
        self.list.selected_item().map(|item| item.id.as_str())
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    pub id: String,
    pub image: String,
    pub title: String,
    pub author: String,
}

impl PreviewItem {
    pub fn from_book(book: &Book, catalog: &Catalog) -> Self {
        Self {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            author: catalog.author_name(&book.author).to_string(),
        }
    }
}

/// The list container.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    pub items: Vec<PreviewItem>,
    pub selected_index: usize,
    pub message_visible: bool,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one item per book, in order. Existing items are kept.
    pub fn render(&mut self, books: &[&Book], catalog: &Catalog) {
        self.items
            .extend(books.iter().map(|book| PreviewItem::from_book(book, catalog)));
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.selected_index = 0;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_id_at(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|item| item.id.as_str())
    }

    pub fn selected_item(&self) -> Option<&PreviewItem> {
        self.items.get(self.selected_index)
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected_index < self.items.len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.items.len().saturating_sub(1);
    }
}

/// The "show more" control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowMoreButton {
    pub disabled: bool,
    pub remaining: usize,
}

impl ShowMoreButton {
    pub fn update(&mut self, remaining: usize) {
        self.remaining = remaining;
        self.disabled = remaining == 0;
    }

    pub fn label(&self) -> String {
        format!("Show more ({})", self.remaining)
    }
}

/// Open/closed flag of a modal surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay {
    open: bool,
}

impl Overlay {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

pub struct SearchOverlay {
    pub overlay: Overlay,
    pub form: SearchForm,
}

impl SearchOverlay {
    pub fn new() -> Self {
        Self {
            overlay: Overlay::default(),
            form: SearchForm::new(),
        }
    }
}

impl Default for SearchOverlay {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SettingsOverlay {
    pub overlay: Overlay,
    pub form: SettingsForm,
}

impl SettingsOverlay {
    pub fn new() -> Self {
        Self {
            overlay: Overlay::default(),
            form: SettingsForm::new(),
        }
    }
}

impl Default for SettingsOverlay {
    fn default() -> Self {
        Self::new()
    }
}

/// Fields of the detail overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailContent {
    /// Backdrop image (drawn blurred)
    pub blur: String,
    pub image: String,
    pub title: String,
    /// `"<author> (<year>)"`
    pub subtitle: String,
    pub description: String,
}

impl DetailContent {
    pub fn from_book(book: &Book, catalog: &Catalog) -> Self {
        Self {
            blur: book.image.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: catalog.subtitle(book),
            description: book.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DetailOverlay {
    pub overlay: Overlay,
    pub content: DetailContent,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Active theme plus the two color tokens it set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub active: ThemeName,
    pub tokens: ColorTokens,
}

impl ThemeState {
    pub fn apply(&mut self, theme: ThemeName) {
        self.active = theme;
        self.tokens = theme.tokens();
    }
}

/// UI state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Scroll offset for the list
    pub scroll_offset: usize,
    /// Visible list rows
    pub viewport_height: usize,
    /// Where the list was last drawn
    pub list_area: Rect,
    /// Where the show-more button was last drawn
    pub button_area: Rect,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Update scroll offset to keep selection visible
    pub fn update_scroll(&mut self, selected: usize) {
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if self.viewport_height > 0 && selected >= self.scroll_offset + self.viewport_height {
            self.scroll_offset = selected + 1 - self.viewport_height;
        }
    }

    /// List item index under a screen row, if the row is inside the list body.
    pub fn list_index_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area;
        let inside_x = column > area.x && column < area.x + area.width.saturating_sub(1);
        let inside_y = row > area.y && row < area.y + area.height.saturating_sub(1);
        if !inside_x || !inside_y {
            return None;
        }
        Some(self.scroll_offset + (row - area.y - 1) as usize)
    }

    pub fn is_on_button(&self, column: u16, row: u16) -> bool {
        let area = self.button_area;
        column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
    }
}
