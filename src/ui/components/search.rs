//! Search overlay renderer.

use super::{render_box, BoxLine, LineStyle};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormRow, SearchOverlayInfo};

/// Width of the label column inside form overlays.
const LABEL_WIDTH: usize = 8;

/// Renders the search form: the title input and the genre and author
/// selectors. The focused row is drawn in the cursor style.
///
/// # Layout
///
/// ```text
/// ┌ Search ───────────────────────┐
/// │ Title   dune_                 │
/// │ Genre   ‹ All Genres ›        │
/// │ Author  ‹ All Authors ›       │
/// └───────────────────────────────┘
/// ```
pub fn render_search_overlay(search: &SearchOverlayInfo, theme: &Theme, cols: usize) {
    let lines: Vec<BoxLine> = search.rows.iter().map(form_line).collect();
    render_box(" Search ", &lines, theme, cols);
}

/// Formats one form row as a box line.
pub(super) fn form_line(row: &FormRow) -> BoxLine {
    let value = if row.is_select {
        format!("‹ {} ›", row.value)
    } else if row.is_focused {
        format!("{}_", row.value)
    } else {
        row.value.clone()
    };
    BoxLine {
        text: format!("{:<LABEL_WIDTH$}{value}", row.label),
        style: if row.is_focused { LineStyle::Focused } else { LineStyle::Normal },
    }
}
