//! Footer component renderers: the show-more control and the keybinding bar.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, ShowMoreInfo};

/// Renders the show-more control with its remaining count.
///
/// A disabled control is drawn dimmed and without the accent color.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_show_more(row: usize, show_more: &ShowMoreInfo, theme: &Theme, cols: usize) -> usize {
    let label = format!("[ {}{} ]", show_more.label, show_more.remaining_label());

    position_cursor(row, 1);
    print!("{}", theme.base_style());
    if show_more.disabled {
        print!("{}", Theme::dim());
    } else {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(theme.accent));
    }
    print!("{}", center(&label, cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the footer help bar at the specified row.
///
/// Keybinding hints are centered, dimmed, and truncated on narrow panes.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", theme.base_style());
    print!("{}", Theme::dim());
    print!("{}", center(&footer.keybindings, cols));
    print!("{}", Theme::reset());
    row + 1
}
