//! Event handling and state transition logic.
//!
//! [`handle_event`] is the dispatch table of the application: every user
//! gesture and host notification arrives as an [`Event`], is matched to one
//! arm, mutates [`AppState`] and reports whether a re-render is needed plus
//! any [`Action`]s for the runtime.
//!
//! # Event Types
//!
//! - **Triggers**: `OpenSearch`, `OpenSettings`, `SelectPreview`, `Click`
//! - **Search form**: `SearchInput`, `SearchBackspace`, `SearchNextField`,
//!   `SearchPrevField`, `SearchSelect`, `SubmitSearch`, `CancelSearch`
//! - **Settings form**: `SettingsToggle`, `SubmitSettings`, `CancelSettings`
//! - **Browsing**: `MoveCursor`, `ShowMore`, `CloseDetail`
//! - **System**: `PermissionsResult`, `CatalogLoaded`, `CatalogLoadFailed`,
//!   `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use bookgrid::app::{handle_event, AppState, Event};
//! use bookgrid::catalog::Catalog;
//! use bookgrid::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin(), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::OpenSearch)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::{Direction, InputMode, SearchField};
use crate::app::{Action, AppState};
use crate::catalog::Catalog;
use crate::domain::error::Result;
use zellij_tile::prelude::PermissionType;

/// Events triggered by user input or host notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Header search trigger: opens the search overlay.
    OpenSearch,
    /// Header settings trigger: opens the settings overlay.
    OpenSettings,

    /// Appends a character to the title field.
    SearchInput(char),
    /// Removes the last character of the title field.
    SearchBackspace,
    /// Moves focus to the next search field.
    SearchNextField,
    /// Moves focus to the previous search field.
    SearchPrevField,
    /// Cycles the focused selector by the given step.
    SearchSelect(isize),
    /// Submits the search form.
    SubmitSearch,
    /// Closes the search overlay without filtering.
    CancelSearch,

    /// Flips the theme selector in the settings form.
    SettingsToggle,
    /// Applies the selected theme and closes settings.
    SubmitSettings,
    /// Closes settings without applying.
    CancelSettings,

    /// Moves the tile cursor.
    MoveCursor(Direction),
    /// Activates the show-more control.
    ShowMore,
    /// Activates the tile under the cursor.
    SelectPreview,
    /// Mouse click at a 1-indexed screen cell.
    Click {
        row: usize,
        col: usize,
    },
    /// Closes the detail overlay.
    CloseDetail,

    /// Permissions granted after the startup request.
    PermissionsResult {
        granted: Vec<PermissionType>,
    },
    /// The configured dataset file, parsed and validated.
    CatalogLoaded {
        catalog: Box<Catalog>,
    },
    /// Reading or parsing the configured dataset file failed.
    CatalogLoadFailed {
        error: String,
    },

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(render, actions)`: whether the pane needs a re-render, and the side
/// effects to run in sequence.
///
/// # Errors
///
/// Returns an error when a loaded dataset rejects the configured page size.
/// State is left unchanged in that case.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::OpenSearch => {
            tracing::debug!("opening search overlay");
            state.overlays.search.form.focus = SearchField::Title;
            state.overlays.search.open = true;
            Ok((true, vec![]))
        }
        Event::OpenSettings => {
            tracing::debug!(theme = state.theme_mode().as_str(), "opening settings overlay");
            state.open_settings();
            Ok((true, vec![]))
        }
        Event::SearchInput(c) => {
            let form = &mut state.overlays.search.form;
            if !state.overlays.search.open || form.focus != SearchField::Title {
                return Ok((false, vec![]));
            }
            form.title.push(*c);
            tracing::trace!(title = %form.title, "title field updated");
            Ok((true, vec![]))
        }
        Event::SearchBackspace => {
            if !state.overlays.search.open {
                return Ok((false, vec![]));
            }
            let changed = state.overlays.search.form.title.pop().is_some();
            Ok((changed, vec![]))
        }
        Event::SearchNextField => {
            let form = &mut state.overlays.search.form;
            form.focus = form.focus.next();
            Ok((state.overlays.search.open, vec![]))
        }
        Event::SearchPrevField => {
            let form = &mut state.overlays.search.form;
            form.focus = form.focus.prev();
            Ok((state.overlays.search.open, vec![]))
        }
        Event::SearchSelect(step) => {
            state.overlays.search.form.cycle_focused(*step);
            Ok((state.overlays.search.open, vec![]))
        }
        Event::SubmitSearch => {
            state.submit_search();
            Ok((true, vec![]))
        }
        Event::CancelSearch => {
            tracing::debug!("search cancelled");
            state.overlays.search.open = false;
            Ok((true, vec![]))
        }
        Event::SettingsToggle => {
            let settings = &mut state.overlays.settings;
            settings.theme = settings.theme.toggled();
            Ok((settings.open, vec![]))
        }
        Event::SubmitSettings => {
            state.submit_settings();
            Ok((true, vec![]))
        }
        Event::CancelSettings => {
            state.overlays.settings.open = false;
            Ok((true, vec![]))
        }
        Event::MoveCursor(direction) => {
            let before = state.cursor;
            state.move_cursor(*direction);
            Ok((state.cursor != before, vec![]))
        }
        Event::ShowMore => Ok((state.show_more(), vec![])),
        Event::SelectPreview => {
            let preview = state.selected_preview().map(str::to_string);
            Ok((state.open_detail(preview.as_deref()), vec![]))
        }
        Event::Click { row, col } => {
            if state.input_mode() != InputMode::Browse {
                return Ok((false, vec![]));
            }
            let Some(index) = state.grid_index_at(*row, *col) else {
                tracing::trace!(row, col, "click outside any preview");
                return Ok((false, vec![]));
            };
            state.cursor = index;
            let preview = state.selected_preview().map(str::to_string);
            state.open_detail(preview.as_deref());
            Ok((true, vec![]))
        }
        Event::CloseDetail => {
            state.overlays.detail.open = false;
            Ok((true, vec![]))
        }
        Event::PermissionsResult { granted } => {
            let has_access = granted.contains(&PermissionType::FullHdAccess);
            match (&state.catalog_path, has_access) {
                (Some(path), true) => {
                    tracing::debug!(path = %path.display(), "host access granted, loading catalog");
                    Ok((false, vec![Action::LoadCatalog(path.clone())]))
                }
                (Some(path), false) => {
                    tracing::warn!(
                        path = %path.display(),
                        "host access not granted, keeping built-in catalog"
                    );
                    Ok((false, vec![]))
                }
                (None, _) => Ok((false, vec![])),
            }
        }
        Event::CatalogLoaded { catalog } => {
            tracing::info!(
                books = catalog.books.len(),
                authors = catalog.authors.len(),
                genres = catalog.genres.len(),
                "catalog loaded"
            );
            state.reset_catalog(catalog.as_ref().clone())?;
            Ok((true, vec![]))
        }
        Event::CatalogLoadFailed { error } => {
            tracing::warn!(error = %error, "failed to read catalog, keeping built-in catalog");
            Ok((false, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{Theme, ThemeMode};
    use std::path::PathBuf;

    fn state() -> AppState {
        AppState::new(Catalog::builtin(), Theme::default())
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn typing_goes_to_title_only() {
        let mut state = state();
        assert_eq!(send(&mut state, Event::SearchInput('x')), (false, vec![]));

        send(&mut state, Event::OpenSearch);
        assert_eq!(state.input_mode(), InputMode::Search(SearchField::Title));
        for c in "dun".chars() {
            send(&mut state, Event::SearchInput(c));
        }
        send(&mut state, Event::SearchBackspace);
        assert_eq!(state.overlays.search.form.title, "du");

        send(&mut state, Event::SearchNextField);
        assert_eq!(send(&mut state, Event::SearchInput('z')), (false, vec![]));
        assert_eq!(state.overlays.search.form.title, "du");

        send(&mut state, Event::CancelSearch);
        send(&mut state, Event::OpenSearch);
        assert_eq!(state.input_mode(), InputMode::Search(SearchField::Title));
    }

    #[test]
    fn search_by_genre_selector() {
        let mut state = state();
        send(&mut state, Event::OpenSearch);
        send(&mut state, Event::SearchNextField);
        let horror = state
            .catalog
            .genres
            .iter()
            .position(|(_, name)| name == "Horror")
            .unwrap();
        send(&mut state, Event::SearchSelect(horror as isize + 1));
        send(&mut state, Event::SubmitSearch);

        assert!(!state.overlays.search.open);
        assert!(!state.session.matches().is_empty());
        assert!(state
            .session
            .matches()
            .iter()
            .all(|b| b.genres.iter().any(|g| state.catalog.genres.get(g) == Some("Horror"))));
    }

    #[test]
    fn cancel_keeps_results_and_draft() {
        let mut state = state();
        let before = state.session.matches().len();
        send(&mut state, Event::OpenSearch);
        send(&mut state, Event::SearchInput('q'));
        send(&mut state, Event::CancelSearch);

        assert_eq!(state.session.matches().len(), before);
        assert_eq!(state.overlays.search.form.title, "q");
        assert_eq!(state.input_mode(), InputMode::Browse);
    }

    #[test]
    fn settings_toggle_then_cancel_leaves_theme() {
        let mut state = state();
        send(&mut state, Event::OpenSettings);
        send(&mut state, Event::SettingsToggle);
        send(&mut state, Event::CancelSettings);
        assert_eq!(state.theme_mode(), ThemeMode::Day);

        send(&mut state, Event::OpenSettings);
        assert_eq!(state.overlays.settings.theme, ThemeMode::Day);
        send(&mut state, Event::SettingsToggle);
        send(&mut state, Event::SubmitSettings);
        assert_eq!(state.theme_mode(), ThemeMode::Night);
    }

    #[test]
    fn select_preview_opens_detail() {
        let mut state = state();
        send(&mut state, Event::MoveCursor(Direction::Right));
        let (render, _) = send(&mut state, Event::SelectPreview);

        assert!(render);
        assert_eq!(state.input_mode(), InputMode::Detail);
        let content = state.overlays.detail.content.clone().unwrap();
        assert_eq!(content.title, state.catalog.books[1].title);

        send(&mut state, Event::CloseDetail);
        assert_eq!(state.input_mode(), InputMode::Browse);
        assert_eq!(state.overlays.detail.content, Some(content));
    }

    #[test]
    fn click_on_empty_cell_is_ignored() {
        let mut state = state();
        state.set_viewport(24, 100);
        assert_eq!(send(&mut state, Event::Click { row: 1, col: 1 }), (false, vec![]));
        assert!(!state.overlays.detail.open);

        let (render, _) = send(&mut state, Event::Click { row: 4, col: 70 });
        assert!(render);
        assert_eq!(state.cursor, 2);
        assert!(state.overlays.detail.open);
    }

    #[test]
    fn permission_grant_requests_catalog_load() {
        let mut state = state();
        let granted = vec![PermissionType::FullHdAccess];
        assert_eq!(
            send(&mut state, Event::PermissionsResult { granted: granted.clone() }),
            (false, vec![])
        );

        state.catalog_path = Some(PathBuf::from("/host/books.json"));
        assert_eq!(
            send(&mut state, Event::PermissionsResult { granted }),
            (false, vec![Action::LoadCatalog(PathBuf::from("/host/books.json"))])
        );
        assert_eq!(
            send(&mut state, Event::PermissionsResult { granted: vec![] }),
            (false, vec![])
        );
    }

    #[test]
    fn loaded_catalog_replaces_everything() {
        let mut state = state();
        let contents = r#"{
            "page_size": 1,
            "books": [
                {"id": "b1", "title": "Solaris", "author": "a1", "image": "",
                 "published": "1961-06-01T00:00:00Z"},
                {"id": "b2", "title": "Fiasco", "author": "a1", "image": "",
                 "published": "1986-01-01T00:00:00Z"}
            ],
            "authors": {"a1": "Stanislaw Lem"},
            "genres": {}
        }"#;

        let catalog = Box::new(Catalog::from_json_str(contents).unwrap());
        let (render, _) = send(&mut state, Event::CatalogLoaded { catalog });
        assert!(render);
        assert_eq!(state.session.matches().len(), 2);
        assert_eq!(state.list.len(), 1);
        assert_eq!(state.session.remaining(), 1);
        assert_eq!(state.overlays.search.form.author.options.len(), 2);
    }

    #[test]
    fn failed_load_keeps_builtin_catalog() {
        let mut state = state();
        let builtin = state.catalog.clone();
        let event = Event::CatalogLoadFailed { error: "/host/books.json: not found".to_string() };
        assert_eq!(send(&mut state, event), (false, vec![]));
        assert_eq!(state.catalog, builtin);
        assert_eq!(state.list.len(), builtin.page_size.min(builtin.books.len()));
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = state();
        assert_eq!(send(&mut state, Event::CloseFocus), (false, vec![Action::CloseFocus]));
    }
}
