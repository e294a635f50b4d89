//! Composable UI component renderers.
//!
//! Each component draws one named control of the browsing surface.
//!
//! # Components
//!
//! - [`header`]: Title, match count, search and settings triggers
//! - [`grid`]: Preview tiles
//! - [`empty`]: No-results message
//! - [`footer`]: Show-more control and keybinding hints
//! - [`search`], [`settings`], [`detail`]: Overlay boxes
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Tile grid or no-results message]
//! [Border]
//! [Show more (N)]
//! [Footer]
//! ```
//!
//! Overlays are drawn last, as a centered box over the grid.

mod detail;
mod empty;
mod footer;
mod grid;
mod header;
mod search;
mod settings;

use crate::ui::helpers::{char_width, fit, position_cursor, truncate};
use crate::ui::layout::GRID_TOP;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail_overlay;
use empty::render_empty_state;
use footer::{render_footer, render_show_more};
use grid::render_grid;
use header::render_header;
use search::render_search_overlay;
use settings::render_settings_overlay;

/// Horizontal margin around overlay boxes.
const BOX_MARGIN: usize = 4;

/// Widest an overlay box gets, borders included.
const BOX_MAX_WIDTH: usize = 72;

/// Emphasis of a line inside an overlay box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineStyle {
    Normal,
    Bold,
    Dim,
    /// Drawn in the cursor style.
    Focused,
}

/// One line of overlay content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BoxLine {
    pub text: String,
    pub style: LineStyle,
}

/// Fills the whole pane with the theme background.
fn render_background(theme: &Theme, rows: usize, cols: usize) {
    for row in 1..=rows {
        position_cursor(row, 1);
        print!("{}{}{}", theme.base_style(), " ".repeat(cols), Theme::reset());
    }
}

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", theme.base_style());
    print!("{}", Theme::fg(theme.accent));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

fn box_width(cols: usize) -> usize {
    cols.saturating_sub(BOX_MARGIN * 2).min(BOX_MAX_WIDTH).max(4)
}

/// Text width available inside an overlay box.
pub(crate) fn box_inner_width(cols: usize) -> usize {
    box_width(cols) - 4
}

/// Draws a bordered box with `title` in its top edge, horizontally
/// centered and starting on the first grid row.
///
/// ```text
/// ┌ Title ──────┐
/// │ line        │
/// └─────────────┘
/// ```
pub(crate) fn render_box(title: &str, lines: &[BoxLine], theme: &Theme, cols: usize) {
    let width = box_width(cols);
    let inner = width - 2;
    let left = (cols.saturating_sub(width)) / 2 + 1;
    let border = || format!("{}{}", theme.base_style(), Theme::fg(theme.accent));

    let mut row = GRID_TOP;
    position_cursor(row, left);
    let top = truncate(title, inner);
    let rule = "─".repeat(inner.saturating_sub(char_width(&top)));
    print!("{}┌{top}{rule}┐{}", border(), Theme::reset());

    for line in lines {
        row += 1;
        let style = match line.style {
            LineStyle::Normal => theme.base_style(),
            LineStyle::Bold => format!("{}{}", theme.base_style(), Theme::bold()),
            LineStyle::Dim => format!("{}{}", theme.base_style(), Theme::dim()),
            LineStyle::Focused => theme.cursor_style(),
        };
        position_cursor(row, left);
        print!("{}│{}", border(), Theme::reset());
        print!("{} {} {}", style, fit(&line.text, inner - 2), Theme::reset());
        print!("{}│{}", border(), Theme::reset());
    }

    row += 1;
    position_cursor(row, left);
    print!("{}└{}┘{}", border(), "─".repeat(inner), Theme::reset());
}

/// Renders the full browsing surface and any open overlays.
///
/// # Parameters
///
/// * `vm` - View model for this frame
/// * `theme` - Active theme
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render_frame(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    render_background(theme, rows, cols);

    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    render_border(current_row, theme, cols);

    if let Some(empty) = &vm.list_message {
        render_empty_state(empty, theme, cols);
    } else {
        render_grid(&vm.grid, theme);
    }

    let footer_row = rows;
    let show_more_row = footer_row.saturating_sub(1);
    let border_row = show_more_row.saturating_sub(1);
    if border_row > current_row {
        render_border(border_row, theme, cols);
    }
    render_show_more(show_more_row, &vm.show_more, theme, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(detail) = &vm.detail {
        render_detail_overlay(detail, theme, cols);
    }
    if let Some(settings) = &vm.settings {
        render_settings_overlay(settings, theme, cols);
    }
    if let Some(search) = &vm.search {
        render_search_overlay(search, theme, cols);
    }
}
