//! User interface layer: preview rendering, grid layout, theming and ANSI
//! output.
//!
//! ```text
//! Book → render_previews → PreviewList scopes → ListView
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`previews`]: Book → preview tile rendering and the list container
//! - [`layout`]: Grid geometry and mouse hit-testing
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor positioning and width-aware text fitting
//! - [`theme`]: Day/night tokens and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod previews;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use previews::{render_previews, ListView, PreviewList, PreviewTile};
pub use renderer::render;
pub use theme::{ColorScheme, Theme, ThemeMode};
pub use viewmodel::UIViewModel;
