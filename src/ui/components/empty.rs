//! No-results message renderer.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::layout::GRID_TOP;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the no-results message in place of the tile grid.
///
/// # Layout
///
/// ```text
/// [GRID_TOP + 1]  MESSAGE      (bold, centered)
/// [GRID_TOP + 2]  subtitle     (dim, centered)
/// ```
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    position_cursor(GRID_TOP + 1, 1);
    print!("{}", theme.base_style());
    print!("{}", Theme::bold());
    print!("{}", center(&empty.message, cols));
    print!("{}", Theme::reset());

    position_cursor(GRID_TOP + 2, 1);
    print!("{}", theme.base_style());
    print!("{}", Theme::dim());
    print!("{}", center(&empty.subtitle, cols));
    print!("{}", Theme::reset());
}
