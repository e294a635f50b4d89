//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the catalog/ui layers.
//!
//! ```text
//! Key / Mouse → Event → handle_event → AppState mutation → (render?, Actions)
//!                                                               ↓
//!                     CatalogLoaded ←── read_catalog ←── Action::LoadCatalog
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event dispatch table
//! - [`modes`]: Input routing types
//! - [`overlays`]: Search, settings and detail overlay state
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod overlays;
pub mod state;

pub use actions::{read_catalog, Action};
pub use handler::{handle_event, Event};
pub use modes::{Direction, InputMode, SearchField};
pub use state::AppState;
