//! Browsing scenarios driven through the event dispatch table.

use bookgrid::app::{read_catalog, Direction, SearchField};
use bookgrid::{handle_event, AppState, Catalog, Event, InputMode, Theme, ThemeMode};
use std::io::Write;

const FIVE_BOOKS: &str = r#"{
    "page_size": 2,
    "books": [
        {"id": "b1", "title": "Dune", "author": "a1", "image": "https://covers.example/dune.jpg",
         "description": "Spice and sand.", "published": "1965-08-01T00:00:00Z", "genres": ["g-scifi"]},
        {"id": "b2", "title": "Dune Messiah", "author": "a1", "image": "https://covers.example/messiah.jpg",
         "published": "1969-10-15T00:00:00Z", "genres": ["g-scifi"]},
        {"id": "b3", "title": "Carrie", "author": "a2", "image": "https://covers.example/carrie.jpg",
         "published": "1974-04-05T00:00:00Z", "genres": ["g-horror"]},
        {"id": "b4", "title": "The Shining", "author": "a2", "image": "https://covers.example/shining.jpg",
         "published": "1977-01-28T00:00:00Z", "genres": ["g-horror"]},
        {"id": "b5", "title": "Hyperion", "author": "a3", "image": "https://covers.example/hyperion.jpg",
         "published": "1989-05-26T00:00:00Z", "genres": ["g-scifi"]}
    ],
    "authors": {"a1": "Frank Herbert", "a2": "Stephen King", "a3": "Dan Simmons"},
    "genres": {"g-scifi": "Science Fiction", "g-horror": "Horror", "g-fantasy": "Fantasy"}
}"#;

fn five_book_state() -> AppState {
    let catalog = Catalog::from_json_str(FIVE_BOOKS).unwrap();
    AppState::new(catalog, Theme::default())
}

fn send(state: &mut AppState, event: Event) -> bool {
    handle_event(state, &event).unwrap().0
}

fn shown_ids(state: &AppState) -> Vec<String> {
    state.list.tiles().map(|tile| tile.preview.clone()).collect()
}

/// Fills the search form from scratch and submits it. Selector steps count
/// from the "any" option.
fn search(state: &mut AppState, title: &str, genre_steps: isize, author_steps: isize) {
    send(state, Event::OpenSearch);
    let form = &mut state.overlays.search.form;
    form.title.clear();
    form.focus = SearchField::Title;
    form.genre.selected = 0;
    form.author.selected = 0;
    for c in title.chars() {
        send(state, Event::SearchInput(c));
    }
    send(state, Event::SearchNextField);
    send(state, Event::SearchSelect(genre_steps));
    send(state, Event::SearchNextField);
    send(state, Event::SearchSelect(author_steps));
    send(state, Event::SubmitSearch);
}

#[test]
fn show_more_pages_through_five_books() {
    let mut state = five_book_state();

    let vm = state.compute_viewmodel(30, 100);
    assert_eq!(shown_ids(&state), ["b1", "b2"]);
    assert_eq!(vm.show_more.remaining_label(), " (3)");
    assert!(!vm.show_more.disabled);

    assert!(send(&mut state, Event::ShowMore));
    let vm = state.compute_viewmodel(30, 100);
    assert_eq!(shown_ids(&state), ["b1", "b2", "b3", "b4"]);
    assert_eq!(vm.show_more.remaining_label(), " (1)");

    assert!(send(&mut state, Event::ShowMore));
    let vm = state.compute_viewmodel(30, 100);
    assert_eq!(shown_ids(&state), ["b1", "b2", "b3", "b4", "b5"]);
    assert_eq!(vm.show_more.remaining_label(), " (0)");
    assert!(vm.show_more.disabled);

    assert!(!send(&mut state, Event::ShowMore));
    assert_eq!(state.list.len(), 5);
}

#[test]
fn uppercase_title_query_matches_case_insensitively() {
    let mut state = five_book_state();
    search(&mut state, "DUNE", 0, 0);

    assert_eq!(shown_ids(&state), ["b1", "b2"]);
    assert_eq!(state.session.page(), 1);
    assert!(state.compute_viewmodel(30, 100).show_more.disabled);
}

#[test]
fn genre_without_books_shows_no_results_message() {
    let mut state = five_book_state();
    let fantasy = state
        .overlays
        .search
        .form
        .genre
        .options
        .iter()
        .position(|o| o.value == "g-fantasy")
        .unwrap();
    search(&mut state, "", fantasy as isize, 0);

    assert!(state.session.matches().is_empty());
    assert!(state.list.is_empty());
    let vm = state.compute_viewmodel(30, 100);
    assert!(vm.list_message.is_some());
    assert!(vm.grid.tiles.is_empty());
    assert_eq!(vm.show_more.remaining_label(), " (0)");
    assert!(vm.show_more.disabled);

    search(&mut state, "", 0, 0);
    assert_eq!(state.session.matches().len(), 5);
    assert!(state.compute_viewmodel(30, 100).list_message.is_none());
}

#[test]
fn author_and_genre_combine() {
    let mut state = five_book_state();
    // genre options: any, g-scifi, ...; author options: any, a1, ...
    search(&mut state, "", 1, 1);
    assert_eq!(shown_ids(&state), ["b1", "b2"]);

    search(&mut state, "messiah", 1, 1);
    assert_eq!(shown_ids(&state), ["b2"]);
}

#[test]
fn search_after_show_more_starts_over() {
    let mut state = five_book_state();
    send(&mut state, Event::ShowMore);
    send(&mut state, Event::MoveCursor(Direction::Right));
    send(&mut state, Event::MoveCursor(Direction::Right));
    assert_eq!(state.cursor, 2);

    search(&mut state, "", 0, 0);
    assert_eq!(shown_ids(&state), ["b1", "b2"]);
    assert_eq!(state.list.scope_count(), 1);
    assert_eq!(state.cursor, 0);
    assert_eq!(state.compute_viewmodel(30, 100).show_more.remaining, 3);
}

#[test]
fn rendering_twice_gives_identical_tiles() {
    let mut state = five_book_state();
    send(&mut state, Event::ShowMore);

    let first = state.compute_viewmodel(30, 100);
    let second = state.compute_viewmodel(30, 100);
    assert_eq!(first, second);
    assert!(first.grid.tiles.iter().all(|t| !t.title.is_empty()));
}

#[test]
fn clicking_a_tile_opens_its_details() {
    let mut state = five_book_state();
    state.set_viewport(30, 100);

    assert!(send(&mut state, Event::Click { row: 4, col: 35 }));
    assert_eq!(state.input_mode(), InputMode::Detail);

    let vm = state.compute_viewmodel(30, 100);
    let detail = vm.detail.unwrap();
    assert_eq!(detail.title, "Dune Messiah");
    assert_eq!(detail.subtitle, "Frank Herbert (1969)");
    assert_eq!(detail.image, "https://covers.example/messiah.jpg");
    assert_eq!(detail.description, "");

    send(&mut state, Event::CloseDetail);
    assert!(state.compute_viewmodel(30, 100).detail.is_none());
}

#[test]
fn search_form_tab_order_wraps() {
    let mut state = five_book_state();
    send(&mut state, Event::OpenSearch);
    assert_eq!(state.input_mode(), InputMode::Search(SearchField::Title));
    send(&mut state, Event::SearchPrevField);
    assert_eq!(state.input_mode(), InputMode::Search(SearchField::Author));
    send(&mut state, Event::SearchNextField);
    assert_eq!(state.input_mode(), InputMode::Search(SearchField::Title));
}

#[test]
fn night_theme_swaps_tokens() {
    let mut state = five_book_state();
    let day = state.theme.tokens();

    send(&mut state, Event::OpenSettings);
    send(&mut state, Event::SettingsToggle);
    send(&mut state, Event::SubmitSettings);

    assert_eq!(state.theme.mode, ThemeMode::Night);
    let night = state.theme.tokens();
    assert_eq!(night.color_dark, day.color_light);
    assert_eq!(night.color_light, day.color_dark);
}

#[test]
fn catalog_file_replaces_builtin() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{FIVE_BOOKS}").unwrap();

    let mut state = AppState::new(Catalog::builtin(), Theme::default());
    let event = read_catalog(file.path());
    assert!(matches!(event, Event::CatalogLoaded { .. }));
    assert!(send(&mut state, event));
    assert_eq!(state.session.matches().len(), 5);
    assert_eq!(shown_ids(&state), ["b1", "b2"]);
}

#[test]
fn unreadable_catalog_file_keeps_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::new(Catalog::builtin(), Theme::default());
    let before = state.session.matches().len();

    let event = read_catalog(&dir.path().join("missing.json"));
    assert!(!send(&mut state, event));
    assert_eq!(state.session.matches().len(), before);
}
