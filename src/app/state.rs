//! Application state and view model computation.
//!
//! [`AppState`] is the single owner of everything mutable: the session (match
//! set and page depth), the displayed preview list, the overlays, the theme
//! and the tile cursor. Handlers in [`super::handler`] mutate it; the renderer
//! only reads it through [`AppState::compute_viewmodel`].
//!
//! # Example
//!
//! ```rust
//! use bookgrid::app::AppState;
//! use bookgrid::catalog::Catalog;
//! use bookgrid::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin(), Theme::default());
//! state.overlays.search.form.title = "dune".to_string();
//! state.submit_search();
//! assert_eq!(state.session.matches().len(), 3);
//! ```

use super::modes::{Direction, InputMode};
use super::overlays::{DetailContent, Overlays};
use crate::catalog::{filter, Catalog, Session};
use crate::domain::Result;
use crate::ui::layout::{columns_for, GridLayout};
use crate::ui::previews::{ListView, PreviewList};
use crate::ui::theme::{Theme, ThemeMode};
use crate::ui::viewmodel::{
    DetailOverlayInfo, EmptyState, FooterInfo, FormRow, GridInfo, HeaderInfo, SearchOverlayInfo,
    SettingsOverlayInfo, ShowMoreInfo, TileItem, UIViewModel,
};
use std::path::PathBuf;

/// Pane size assumed until the first render reports the real one.
const DEFAULT_VIEWPORT: (usize, usize) = (24, 80);

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The static dataset.
    pub catalog: Catalog,

    /// Active match set and page depth.
    pub session: Session,

    /// Preview scopes currently displayed in the list container.
    pub list: ListView,

    pub overlays: Overlays,

    pub theme: Theme,

    /// Flat index of the tile under the cursor.
    pub cursor: usize,

    /// Last pane size seen by the renderer, `(rows, cols)`.
    pub viewport: (usize, usize),

    /// Dataset file to load once host access is granted.
    pub catalog_path: Option<PathBuf>,

    /// Page size from configuration, applied to every loaded catalog.
    pub page_size_override: Option<usize>,
}

impl AppState {
    /// Creates the state for a fresh start: every book matches and the first
    /// page is rendered.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        let session = Session::new(catalog.books.clone(), catalog.page_size);
        let overlays = Overlays::new(&catalog, theme.mode);
        let mut list = ListView::default();
        list.replace(PreviewList::with_data(session.first_page(), &catalog.authors));

        Self {
            catalog,
            session,
            list,
            overlays,
            theme,
            cursor: 0,
            viewport: DEFAULT_VIEWPORT,
            catalog_path: None,
            page_size_override: None,
        }
    }

    /// Swaps in a newly loaded catalog and starts over. Theme, viewport and
    /// configuration are kept.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::CatalogError::Config`] if the configured page
    /// size is zero.
    pub fn reset_catalog(&mut self, catalog: Catalog) -> Result<()> {
        let catalog = match self.page_size_override {
            Some(page_size) => catalog.with_page_size(page_size)?,
            None => catalog,
        };
        let mut fresh = Self::new(catalog, self.theme.clone());
        fresh.viewport = self.viewport;
        fresh.catalog_path = self.catalog_path.take();
        fresh.page_size_override = self.page_size_override;
        *self = fresh;
        Ok(())
    }

    /// Surface receiving key input.
    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        if self.overlays.search.open {
            InputMode::Search(self.overlays.search.form.focus)
        } else if self.overlays.settings.open {
            InputMode::Settings
        } else if self.overlays.detail.open {
            InputMode::Detail
        } else {
            InputMode::Browse
        }
    }

    /// Records the pane size; the grid layout depends on it.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = (rows, cols);
    }

    /// Filters the catalog with the search form's values, replaces the
    /// session and the displayed list, scrolls to the top and closes the
    /// search overlay.
    pub fn submit_search(&mut self) {
        let criteria = self.overlays.search.form.criteria();
        let matches = filter(&self.catalog.books, &criteria);

        self.session.replace(matches);
        self.list.replace(PreviewList::with_data(
            self.session.first_page(),
            &self.catalog.authors,
        ));
        self.cursor = 0;
        self.overlays.search.open = false;

        tracing::debug!(
            matches = self.session.matches().len(),
            remaining = self.session.remaining(),
            "search submitted"
        );
    }

    /// Appends the next page to the list. Returns `false` when the control
    /// is disabled.
    pub fn show_more(&mut self) -> bool {
        let Some(next) = self.session.show_more() else {
            tracing::debug!("show more ignored, nothing remaining");
            return false;
        };
        let scope = PreviewList::with_data(next, &self.catalog.authors);
        self.list.append(scope);
        true
    }

    /// Opens the detail overlay for `preview`. Unknown or missing ids leave
    /// the overlay closed and its content untouched.
    pub fn open_detail(&mut self, preview: Option<&str>) -> bool {
        let Some(book) = preview.and_then(|id| self.catalog.book(id)) else {
            tracing::debug!(preview = ?preview, "no book for preview, detail not opened");
            return false;
        };
        self.overlays.detail.content = Some(DetailContent::from_book(book, &self.catalog.authors));
        self.overlays.detail.open = true;
        true
    }

    /// Book id of the tile under the cursor.
    #[must_use]
    pub fn selected_preview(&self) -> Option<&str> {
        self.list.tile(self.cursor).map(|tile| tile.preview.as_str())
    }

    /// Index of the tile drawn at screen cell (`row`, `col`), 1-indexed.
    #[must_use]
    pub fn grid_index_at(&self, row: usize, col: usize) -> Option<usize> {
        let (rows, cols) = self.viewport;
        GridLayout::compute(rows, cols, self.list.len(), self.cursor).hit_test(row, col)
    }

    /// Book id of the tile at screen cell (`row`, `col`), 1-indexed.
    #[must_use]
    pub fn preview_at(&self, row: usize, col: usize) -> Option<&str> {
        let index = self.grid_index_at(row, col)?;
        self.list.tile(index).map(|tile| tile.preview.as_str())
    }

    /// Moves the tile cursor, clamped to the displayed tiles.
    pub fn move_cursor(&mut self, direction: Direction) {
        let count = self.list.len();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        let columns = columns_for(self.viewport.1);
        self.cursor = match direction {
            Direction::Left => self.cursor.saturating_sub(1),
            Direction::Right => (self.cursor + 1).min(count - 1),
            Direction::Up => self.cursor.checked_sub(columns).unwrap_or(self.cursor),
            Direction::Down => {
                let below = self.cursor + columns;
                if below < count {
                    below
                } else {
                    self.cursor
                }
            }
        };
    }

    /// Applies the theme chosen in the settings form and closes it.
    pub fn submit_settings(&mut self) {
        let mode = self.overlays.settings.theme;
        self.theme.apply(mode);
        self.overlays.settings.open = false;
    }

    /// Opens settings with the selector showing the current theme.
    pub fn open_settings(&mut self) {
        self.overlays.settings.theme = self.theme.mode;
        self.overlays.settings.open = true;
    }

    /// Computes the view model for a `rows` × `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let layout = GridLayout::compute(rows, cols, self.list.len(), self.cursor);

        let visible = layout.visible_tiles();
        let tiles = self
            .list
            .tiles()
            .enumerate()
            .skip(visible.start)
            .take(visible.len())
            .map(|(index, tile)| TileItem {
                index,
                preview: tile.preview.clone(),
                cover: cover_label(&tile.image),
                title: tile.title.clone(),
                author: tile.author.clone(),
                is_selected: index == self.cursor && self.input_mode() == InputMode::Browse,
            })
            .collect();

        UIViewModel {
            header: self.compute_header(),
            grid: GridInfo { layout, tiles },
            show_more: self.compute_show_more(),
            list_message: self.compute_list_message(),
            footer: self.compute_footer(),
            search: self.compute_search(),
            settings: self.compute_settings(),
            detail: self.compute_detail(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Book Connect ({}) ", self.session.matches().len()),
            search_trigger: "/ Search".to_string(),
            settings_trigger: "s Settings".to_string(),
        }
    }

    fn compute_show_more(&self) -> ShowMoreInfo {
        ShowMoreInfo {
            label: "Show more".to_string(),
            remaining: self.session.remaining(),
            disabled: !self.session.has_more(),
        }
    }

    fn compute_list_message(&self) -> Option<EmptyState> {
        self.session.matches().is_empty().then(|| EmptyState {
            message: "No results found.".to_string(),
            subtitle: "Your filters might be too narrow.".to_string(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode() {
            InputMode::Browse => {
                "arrows/hjkl: move  Enter: details  m: show more  /: search  s: settings  q: quit"
            }
            InputMode::Search(_) => {
                "Tab: next field  Left/Right: change  Enter: search  Esc: cancel"
            }
            InputMode::Settings => "Left/Right: theme  Enter: save  Esc: cancel",
            InputMode::Detail => "Esc/Enter: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search(&self) -> Option<SearchOverlayInfo> {
        use super::modes::SearchField;

        let search = &self.overlays.search;
        if !search.open {
            return None;
        }
        let form = &search.form;
        let label_of = |select: &super::overlays::Select| {
            select.current().map(|o| o.label.clone()).unwrap_or_default()
        };

        Some(SearchOverlayInfo {
            rows: vec![
                FormRow {
                    label: "Title".to_string(),
                    value: form.title.clone(),
                    is_focused: form.focus == SearchField::Title,
                    is_select: false,
                },
                FormRow {
                    label: "Genre".to_string(),
                    value: label_of(&form.genre),
                    is_focused: form.focus == SearchField::Genre,
                    is_select: true,
                },
                FormRow {
                    label: "Author".to_string(),
                    value: label_of(&form.author),
                    is_focused: form.focus == SearchField::Author,
                    is_select: true,
                },
            ],
        })
    }

    fn compute_settings(&self) -> Option<SettingsOverlayInfo> {
        let settings = &self.overlays.settings;
        settings.open.then(|| SettingsOverlayInfo {
            theme: FormRow {
                label: "Theme".to_string(),
                value: settings.theme.label().to_string(),
                is_focused: true,
                is_select: true,
            },
        })
    }

    fn compute_detail(&self) -> Option<DetailOverlayInfo> {
        let detail = &self.overlays.detail;
        if !detail.open {
            return None;
        }
        detail.content.as_ref().map(|content| DetailOverlayInfo {
            image: content.image.clone(),
            title: content.title.clone(),
            subtitle: content.subtitle.clone(),
            description: content.description.clone(),
        })
    }

    /// Current theme mode.
    #[must_use]
    pub const fn theme_mode(&self) -> ThemeMode {
        self.theme.mode
    }
}

/// Short stand-in for a cover image: the last path segment of its URL.
fn cover_label(image: &str) -> String {
    let name = image
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(image);
    format!("[{name}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Catalog::builtin(), Theme::default())
    }

    fn small_state(page_size: usize) -> AppState {
        let catalog = Catalog::builtin().with_page_size(page_size).unwrap();
        AppState::new(catalog, Theme::default())
    }

    #[test]
    fn starts_with_first_page_of_everything() {
        let state = small_state(5);
        assert_eq!(state.session.matches().len(), state.catalog.books.len());
        assert_eq!(state.list.len(), 5);
        assert_eq!(state.list.scope_count(), 1);
        assert_eq!(state.input_mode(), InputMode::Browse);
        assert_eq!(state.selected_preview(), Some(state.catalog.books[0].id.as_str()));
    }

    #[test]
    fn show_more_appends_a_scope() {
        let mut state = small_state(5);
        assert!(state.show_more());
        assert_eq!(state.list.len(), 10);
        assert_eq!(state.list.scope_count(), 2);
        assert!(state.show_more());
        assert_eq!(state.list.len(), state.catalog.books.len());
        assert!(!state.show_more());
        assert_eq!(state.list.scope_count(), 3);
    }

    #[test]
    fn search_replaces_list_and_resets_cursor() {
        let mut state = small_state(2);
        state.show_more();
        state.cursor = 3;
        state.overlays.search.open = true;
        state.overlays.search.form.title = "DUNE".to_string();

        state.submit_search();

        assert!(!state.overlays.search.open);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.session.page(), 1);
        assert_eq!(state.list.scope_count(), 1);
        let titles: Vec<&str> = state.list.tiles().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Dune Messiah"]);
        assert_eq!(state.session.remaining(), 1);
    }

    #[test]
    fn empty_result_shows_message() {
        let mut state = state();
        state.overlays.search.form.title = "no such book".to_string();
        state.submit_search();

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.list_message.is_some());
        assert!(vm.grid.tiles.is_empty());
        assert!(vm.show_more.disabled);
        assert_eq!(vm.show_more.remaining_label(), " (0)");
    }

    #[test]
    fn detail_requires_known_book() {
        let mut state = state();
        assert!(!state.open_detail(None));
        assert!(!state.open_detail(Some("missing")));
        assert!(!state.overlays.detail.open);
        assert!(state.overlays.detail.content.is_none());

        let id = state.catalog.books[2].id.clone();
        assert!(state.open_detail(Some(&id)));
        assert_eq!(state.input_mode(), InputMode::Detail);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.detail.map(|d| d.title), Some(state.catalog.books[2].title.clone()));
    }

    #[test]
    fn cursor_moves_within_grid() {
        let mut state = small_state(10);
        state.set_viewport(24, 64);

        state.move_cursor(Direction::Left);
        assert_eq!(state.cursor, 0);
        state.move_cursor(Direction::Down);
        assert_eq!(state.cursor, 2);
        state.move_cursor(Direction::Right);
        assert_eq!(state.cursor, 3);
        state.move_cursor(Direction::Up);
        assert_eq!(state.cursor, 1);

        state.cursor = 9;
        state.move_cursor(Direction::Down);
        assert_eq!(state.cursor, 9);
        state.move_cursor(Direction::Right);
        assert_eq!(state.cursor, 9);
    }

    #[test]
    fn preview_at_resolves_clicked_tile() {
        let mut state = small_state(6);
        state.set_viewport(24, 100);
        let second = state.catalog.books[1].id.clone();

        assert_eq!(state.preview_at(4, 40), Some(second.as_str()));
        assert_eq!(state.preview_at(1, 1), None);
    }

    #[test]
    fn settings_apply_on_submit_only() {
        let mut state = state();
        state.open_settings();
        state.overlays.settings.theme = ThemeMode::Night;
        assert_eq!(state.theme_mode(), ThemeMode::Day);

        state.submit_settings();
        assert_eq!(state.theme_mode(), ThemeMode::Night);
        assert!(!state.overlays.settings.open);
    }

    #[test]
    fn reset_catalog_keeps_configuration() {
        let mut state = state();
        state.set_viewport(40, 120);
        state.page_size_override = Some(4);
        state.catalog_path = Some(PathBuf::from("/host/books.json"));
        state.theme.apply(ThemeMode::Night);
        state.cursor = 3;

        state.reset_catalog(Catalog::builtin()).unwrap();

        assert_eq!(state.catalog.page_size, 4);
        assert_eq!(state.list.len(), 4);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.viewport, (40, 120));
        assert_eq!(state.theme_mode(), ThemeMode::Night);
        assert_eq!(state.overlays.settings.theme, ThemeMode::Night);
        assert!(state.catalog_path.is_some());
    }

    #[test]
    fn cover_label_uses_file_name() {
        assert_eq!(cover_label("https://covers.example/b/dune.jpg"), "[dune.jpg]");
        assert_eq!(cover_label(""), "[]");
    }
}
