//! Zellij plugin wrapper and entry point.
//!
//! A thin integration layer between the bookgrid library and the Zellij
//! plugin system: it maps Zellij events to library [`Event`]s, runs the
//! returned [`Action`]s and delegates rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState` on the
//!    built-in catalog
//! 2. **Subscribe**: Key, Mouse and `PermissionRequestResult` events
//! 3. **Permission**: once host access is granted, a configured
//!    `catalog_path` is read and replaces the built-in catalog
//! 4. **Update**: Map events, delegate to `handle_event`, execute actions
//! 5. **Render**: Record the pane size, call the library renderer
//!
//! # Keybindings
//!
//! Browsing:
//! - Arrows / `h` `j` `k` `l`: Move between tiles
//! - `Enter`: Open details of the selected book
//! - `/`: Search
//! - `s`: Settings
//! - `m` / `Space`: Show more
//! - `q`: Close plugin
//!
//! Search form:
//! - Typing: Edit the title query
//! - `Tab` / `Shift+Tab` / `Up` / `Down`: Change field
//! - `Left` / `Right`: Cycle genre or author
//! - `Enter`: Search
//! - `Esc`: Cancel
//!
//! Settings: `Left` / `Right` / `Tab` toggle the theme, `Enter` saves,
//! `Esc` cancels. Details: `Esc` / `Enter` / `c` close.
//!
//! Mouse: clicking a tile opens its details; scrolling moves the cursor.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookgrid::app::{read_catalog, Direction, SearchField};
use bookgrid::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: bookgrid::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: bookgrid::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `FullHdAccess` to read the configured catalog file and write
    /// span logs under `/host`.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookgrid::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            catalog_path = ?config.catalog_path,
            page_size = ?config.page_size,
            color_scheme = ?config.color_scheme,
            "parsed configuration"
        );
        self.app = bookgrid::initialize(&config);

        request_permission(&[PermissionType::FullHdAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => self.map_key_event(key),
            zellij_tile::prelude::Event::Mouse(mouse) => self.map_mouse_event(mouse),
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Some(Self::map_permission_event(status))
            }
            _ => None,
        };

        our_event.is_some_and(|event| self.dispatch(&event))
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        bookgrid::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs an event through the library and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                actions
                    .iter()
                    .fold(should_render, |render, action| self.execute_action(action) || render)
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the surface that
    /// currently receives input.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        match self.app.input_mode() {
            InputMode::Browse => Self::map_browse_key(key),
            InputMode::Search(field) => Self::map_search_key(key, field),
            InputMode::Settings => Self::map_settings_key(key),
            InputMode::Detail => Self::map_detail_key(key),
        }
    }

    fn map_browse_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Left | BareKey::Char('h') => Event::MoveCursor(Direction::Left),
            BareKey::Right | BareKey::Char('l') => Event::MoveCursor(Direction::Right),
            BareKey::Up | BareKey::Char('k') => Event::MoveCursor(Direction::Up),
            BareKey::Down | BareKey::Char('j') => Event::MoveCursor(Direction::Down),
            BareKey::Enter => Event::SelectPreview,
            BareKey::Char('/') => Event::OpenSearch,
            BareKey::Char('s') => Event::OpenSettings,
            BareKey::Char('m' | ' ') => Event::ShowMore,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_search_key(key: &KeyWithModifier, field: SearchField) -> Option<Event> {
        if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
            return Some(Event::SearchPrevField);
        }
        Some(match key.bare_key {
            BareKey::Esc => Event::CancelSearch,
            BareKey::Enter => Event::SubmitSearch,
            BareKey::Tab | BareKey::Down => Event::SearchNextField,
            BareKey::Up => Event::SearchPrevField,
            BareKey::Left if field != SearchField::Title => Event::SearchSelect(-1),
            BareKey::Right if field != SearchField::Title => Event::SearchSelect(1),
            BareKey::Backspace => Event::SearchBackspace,
            BareKey::Char(c) if key.has_no_modifiers() || key.has_modifiers(&[KeyModifier::Shift]) => {
                Event::SearchInput(c)
            }
            _ => return None,
        })
    }

    fn map_settings_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Left | BareKey::Right | BareKey::Tab | BareKey::Char('h' | 'l') => {
                Event::SettingsToggle
            }
            BareKey::Enter => Event::SubmitSettings,
            BareKey::Esc => Event::CancelSettings,
            _ => return None,
        })
    }

    fn map_detail_key(key: &KeyWithModifier) -> Option<Event> {
        match key.bare_key {
            BareKey::Esc | BareKey::Enter | BareKey::Char('c' | 'q') => Some(Event::CloseDetail),
            _ => None,
        }
    }

    /// Maps mouse events: clicks hit-test the grid, scrolling moves the
    /// cursor. Zellij reports 0-indexed cells.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        if self.app.input_mode() != InputMode::Browse {
            return None;
        }
        match mouse {
            Mouse::LeftClick(line, col) => {
                let row = usize::try_from(line).ok()? + 1;
                Some(Event::Click { row, col: col + 1 })
            }
            Mouse::ScrollUp(_) => Some(Event::MoveCursor(Direction::Up)),
            Mouse::ScrollDown(_) => Some(Event::MoveCursor(Direction::Down)),
            _ => None,
        }
    }

    fn map_permission_event(status: PermissionStatus) -> Event {
        let granted = match status {
            PermissionStatus::Granted => vec![PermissionType::FullHdAccess],
            PermissionStatus::Denied => {
                tracing::warn!("host access denied, configured catalog cannot be read");
                vec![]
            }
        };
        Event::PermissionsResult { granted }
    }

    /// Executes an action returned from event handling. Returns `true` if
    /// a follow-up event asked for a re-render.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) -> bool {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
                false
            }
            Action::LoadCatalog(path) => {
                let event = read_catalog(path);
                self.dispatch(&event)
            }
        }
    }
}
