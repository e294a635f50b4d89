//! View model types representing renderable UI state.
//!
//! Computed from `AppState` by `compute_viewmodel` and consumed by the
//! renderer. Each field stands for one named control of the browsing
//! surface: header triggers, tile grid, show-more control, no-results
//! message, and the three overlays.

use crate::ui::layout::GridLayout;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub grid: GridInfo,
    pub show_more: ShowMoreInfo,
    /// "No results" message; `Some` only when the match set is empty.
    pub list_message: Option<EmptyState>,
    pub footer: FooterInfo,
    pub search: Option<SearchOverlayInfo>,
    pub settings: Option<SettingsOverlayInfo>,
    pub detail: Option<DetailOverlayInfo>,
}

/// Header bar: title plus the two overlay triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub search_trigger: String,
    pub settings_trigger: String,
}

/// The visible part of the tile grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridInfo {
    pub layout: GridLayout,
    /// Visible tiles with their absolute indexes.
    pub tiles: Vec<TileItem>,
}

/// One tile on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileItem {
    pub index: usize,
    pub preview: String,
    pub cover: String,
    pub title: String,
    pub author: String,
    pub is_selected: bool,
}

/// Show-more control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowMoreInfo {
    pub label: String,
    /// Rendered as ` (N)`.
    pub remaining: usize,
    pub disabled: bool,
}

impl ShowMoreInfo {
    /// The remaining-count label, e.g. `" (3)"`.
    #[must_use]
    pub fn remaining_label(&self) -> String {
        format!(" ({})", self.remaining)
    }
}

/// Footer keybinding hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Centered message shown in place of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// A labelled form row in an overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub label: String,
    pub value: String,
    pub is_focused: bool,
    /// Selector rows show `‹ value ›` arrows.
    pub is_select: bool,
}

/// Search overlay contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOverlayInfo {
    pub rows: Vec<FormRow>,
}

/// Settings overlay contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsOverlayInfo {
    pub theme: FormRow,
}

/// Detail overlay contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOverlayInfo {
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
}
