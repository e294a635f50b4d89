//! Header component renderer.
//!
//! The title and match count on the left, the search and settings triggers
//! on the right.

use crate::ui::helpers::{char_width, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header bar at the specified row.
///
/// # Parameters
///
/// * `row` - Row position to render the header (1-indexed)
/// * `header` - Header information (title and trigger labels)
/// * `theme` - Active theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
/// [bold TITLE][padding][/ Search]  [s Settings]
/// ```
///
/// The triggers are dropped first when the pane is too narrow for both.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let triggers = format!("{}  {} ", header.search_trigger, header.settings_trigger);
    let triggers_len = char_width(&triggers);
    let show_triggers = char_width(&header.title) + triggers_len <= cols;
    let title_width = if show_triggers { cols - triggers_len } else { cols };

    position_cursor(row, 1);
    print!("{}", theme.base_style());
    print!("{}", Theme::bold());
    print!("{}", fit(&header.title, title_width));
    print!("{}", Theme::reset());

    if show_triggers {
        print!("{}", theme.base_style());
        print!("{}", Theme::fg(theme.accent));
        print!("{triggers}");
        print!("{}", Theme::reset());
    }
    row + 1
}
