//! Tile grid renderer.
//!
//! Each tile occupies `TILE_HEIGHT` lines and [`TILE_WIDTH`] columns:
//!
//! ```text
//! [cover]
//! Title
//! Author
//! [spacer]
//! ```
//!
//! The two rightmost columns of a tile are the gap to its neighbour.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::layout::TILE_WIDTH;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{GridInfo, TileItem};

const TILE_GAP: usize = 2;

/// Renders every visible tile at the position given by the grid layout.
pub fn render_grid(grid: &GridInfo, theme: &Theme) {
    for tile in &grid.tiles {
        if let Some((row, col)) = grid.layout.tile_origin(tile.index) {
            render_tile(row, col, tile, theme);
        }
    }
}

fn render_tile(row: usize, col: usize, tile: &TileItem, theme: &Theme) {
    let width = TILE_WIDTH - TILE_GAP;
    let style = if tile.is_selected {
        theme.cursor_style()
    } else {
        theme.base_style()
    };

    let lines = [
        (Theme::dim(), tile.cover.as_str()),
        (Theme::bold(), tile.title.as_str()),
        ("", tile.author.as_str()),
    ];
    for (offset, (weight, text)) in lines.into_iter().enumerate() {
        position_cursor(row + offset, col);
        print!("{style}{weight}{}{}", fit(text, width), Theme::reset());
    }
}
