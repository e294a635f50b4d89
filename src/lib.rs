//! Bookgrid: a Zellij plugin for browsing a book catalog.
//!
//! Bookgrid shows a static catalog of books as a grid of preview tiles and
//! provides:
//! - Paginated display with a "show more" control and remaining count
//! - Filtering by title substring, genre and author
//! - A detail overlay with cover, author, year and description
//! - A day/night theme built from two color tokens

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event dispatch                                   │
//! │  - Session, overlays, cursor                        │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌──────────────────────┐   ┌──────────────────────────┐
//! │ Catalog (catalog/)   │   │ UI Layer (ui/)           │
//! │ - Dataset loading    │   │ - Preview tiles, layout  │
//! │ - Filtering          │   │ - Theme                  │
//! │ - Pagination         │   │ - Components             │
//! └──────────────────────┘   └──────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Book, name indexes, errors (domain/)             │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to JSON Lines              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/bookgrid.wasm" {
//!         catalog_path "~/books.json"
//!         page_size "24"
//!         color_scheme "dark"
//!         theme_file "~/.config/bookgrid/theme.toml"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookgrid::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let total = state.session.matches().len();
//!
//! handle_event(&mut state, &Event::OpenSearch)?;
//! for c in "dune".chars() {
//!     handle_event(&mut state, &Event::SearchInput(c))?;
//! }
//! handle_event(&mut state, &Event::SubmitSearch)?;
//!
//! assert!(state.session.matches().len() < total);
//! # Ok::<(), bookgrid::CatalogError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use catalog::Catalog;
pub use domain::{Book, CatalogError, Result};
pub use ui::{ColorScheme, Theme, ThemeMode};

use infrastructure::expand_tilde;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/bookgrid.wasm" {
///     catalog_path "~/books.json"
///     page_size "24"
///     color_scheme "light"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Dataset JSON file, sandbox path (`~` already expanded). The built-in
    /// catalog is used until it loads, or if it never does.
    pub catalog_path: Option<String>,

    /// Books per page, overriding the dataset's own `page_size`.
    pub page_size: Option<usize>,

    /// Host color preference. Falls back to `COLORFGBG`, then light.
    pub color_scheme: Option<ColorScheme>,

    /// TOML token file replacing the built-in theme tokens.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog_path`, `theme_file`: tilde-expanded; empty values ignored
    /// - `page_size`: positive integer, anything else ignored
    /// - `color_scheme`: `light` or `dark`, anything else ignored
    /// - `trace_level`: passed through to the tracing filter
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookgrid::{ColorScheme, Config};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_path".to_string(), "~/books.json".to_string());
    /// map.insert("page_size".to_string(), "0".to_string());
    /// map.insert("color_scheme".to_string(), "dark".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.catalog_path.as_deref(), Some("/host/books.json"));
    /// assert_eq!(config.page_size, None);
    /// assert_eq!(config.color_scheme, Some(ColorScheme::Dark));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let path = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(expand_tilde)
        };

        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0);

        Self {
            catalog_path: path("catalog_path"),
            page_size,
            color_scheme: config.get("color_scheme").and_then(|s| ColorScheme::parse(s)),
            theme_file: path("theme_file"),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Loads the theme: the configured token file if it parses, else the
/// built-in tokens; the mode follows the host color preference.
fn resolve_theme(config: &Config) -> Theme {
    let theme = config.theme_file.as_ref().map_or_else(Theme::default, |theme_file| {
        Theme::from_file(theme_file).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        })
    });

    let scheme = config
        .color_scheme
        .or_else(ColorScheme::from_env)
        .unwrap_or_default();
    theme.with_mode(ThemeMode::from_preference(scheme))
}

/// Initializes the plugin state with configuration.
///
/// The state starts on the built-in catalog with the first page rendered.
/// When `catalog_path` is set, the runtime requests host access and the
/// file replaces the built-in catalog once it has been read.
///
/// # Example
///
/// ```rust
/// use bookgrid::{initialize, Config};
///
/// let config = Config {
///     page_size: Some(4),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.list.len(), 4);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing bookgrid plugin");

    let theme = resolve_theme(config);

    let builtin = Catalog::builtin();
    let catalog = match config.page_size {
        Some(page_size) => builtin.clone().with_page_size(page_size).unwrap_or_else(|e| {
            tracing::warn!(page_size, error = %e, "ignoring configured page size");
            builtin
        }),
        None => builtin,
    };

    tracing::debug!(
        books = catalog.books.len(),
        page_size = catalog.page_size,
        theme = theme.mode.as_str(),
        "built-in catalog ready"
    );

    let mut state = AppState::new(catalog, theme);
    state.catalog_path = config.catalog_path.as_ref().map(PathBuf::from);
    state.page_size_override = config.page_size;
    state
}
