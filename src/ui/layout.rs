//! Grid geometry shared by view model computation and mouse hit-testing.
//!
//! Screen coordinates are 1-indexed, matching the ANSI cursor positioning
//! used by the components.
//!
//! ```text
//! row 1       [blank]
//! row 2       [header]
//! row 3       [border]
//! row 4..     [tile rows, TILE_HEIGHT lines each]
//! rows-2      [border]
//! rows-1      [show more]
//! rows        [footer]
//! ```

/// Columns occupied by one tile, including the gap after it.
pub const TILE_WIDTH: usize = 32;

/// Lines occupied by one tile: cover, title, author, spacer.
pub const TILE_HEIGHT: usize = 4;

/// First screen row of the grid.
pub const GRID_TOP: usize = 4;

/// Lines below the grid: border, show-more control, footer.
const BOTTOM_CHROME: usize = 3;

/// Placement of the visible part of the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Tiles per grid row.
    pub columns: usize,
    /// Grid rows that fit on screen.
    pub visible_rows: usize,
    /// Index of the first grid row on screen.
    pub first_row: usize,
    /// Total tiles in the list.
    pub tile_count: usize,
}

impl GridLayout {
    /// Computes the layout for a `rows` × `cols` pane showing `tile_count`
    /// tiles with the cursor on tile `cursor`. The window follows the
    /// cursor, keeping it near the middle.
    #[must_use]
    pub fn compute(rows: usize, cols: usize, tile_count: usize, cursor: usize) -> Self {
        let columns = columns_for(cols);
        let visible_rows = (rows.saturating_sub(GRID_TOP - 1 + BOTTOM_CHROME) / TILE_HEIGHT).max(1);
        let total_rows = tile_count.div_euclid(columns) + usize::from(tile_count % columns != 0);

        let cursor_row = cursor / columns;
        let first_row = cursor_row
            .saturating_sub(visible_rows / 2)
            .min(total_rows.saturating_sub(visible_rows));

        Self {
            columns,
            visible_rows,
            first_row,
            tile_count,
        }
    }

    /// Range of tile indexes on screen.
    #[must_use]
    pub fn visible_tiles(&self) -> std::ops::Range<usize> {
        let start = (self.first_row * self.columns).min(self.tile_count);
        let end = ((self.first_row + self.visible_rows) * self.columns).min(self.tile_count);
        start..end
    }

    /// Screen row and column where tile `index` starts, if visible.
    #[must_use]
    pub fn tile_origin(&self, index: usize) -> Option<(usize, usize)> {
        if !self.visible_tiles().contains(&index) {
            return None;
        }
        let grid_row = index / self.columns - self.first_row;
        let grid_col = index % self.columns;
        Some((GRID_TOP + grid_row * TILE_HEIGHT, 1 + grid_col * TILE_WIDTH))
    }

    /// Tile under the screen cell (`row`, `col`), if any. Spacer lines and
    /// gaps past the last column hit nothing.
    #[must_use]
    pub fn hit_test(&self, row: usize, col: usize) -> Option<usize> {
        if row < GRID_TOP || col == 0 {
            return None;
        }
        let rel = row - GRID_TOP;
        let grid_row = rel / TILE_HEIGHT;
        if grid_row >= self.visible_rows || rel % TILE_HEIGHT == TILE_HEIGHT - 1 {
            return None;
        }
        let grid_col = (col - 1) / TILE_WIDTH;
        if grid_col >= self.columns {
            return None;
        }
        let index = (self.first_row + grid_row) * self.columns + grid_col;
        (index < self.tile_count).then_some(index)
    }
}

/// Tiles per row for a pane `cols` wide, at least one.
#[must_use]
pub fn columns_for(cols: usize) -> usize {
    (cols / TILE_WIDTH).max(1)
}
