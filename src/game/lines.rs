use lazy_static::lazy_static;

pub const COLUMNS: usize = 7;
pub const ROWS: usize = 6;
pub const TARGET: usize = 4;
pub const PLAYERS: usize = 2;

/// One potential winning run: the linear indices of 4 contiguous cells.
pub type Line = [usize; TARGET];

/// Linear cell index for `(column, row)`. Row 0 is the bottom row.
pub fn cell_index(column: usize, row: usize) -> usize {
    column * ROWS + row
}

/// Inverse of [`cell_index`].
pub fn col_row(index: usize) -> (usize, usize) {
    (index / ROWS, index % ROWS)
}

lazy_static! {
    /// Every possible 4-in-a-row on the board, in generation order.
    /// A line's position in this table is its identity: `GameState`
    /// records a win as an index into it.
    pub static ref ALL_LINES: Vec<Line> = generate_lines();
}

fn line_from(column: usize, row: usize, dx: isize, dy: isize) -> Option<Line> {
    let mut line = [0usize; TARGET];
    for (i, slot) in line.iter_mut().enumerate() {
        let c = column as isize + i as isize * dx;
        let r = row as isize + i as isize * dy;
        if c < 0 || c >= COLUMNS as isize || r < 0 || r >= ROWS as isize {
            return None;
        }
        *slot = cell_index(c as usize, r as usize);
    }
    Some(line)
}

fn generate_lines() -> Vec<Line> {
    let mut lines = Vec::new();
    for column in 0..COLUMNS {
        for row in 0..ROWS {
            // Horizontal, vertical, both diagonals.
            for (dx, dy) in [(1, 0), (0, 1), (1, 1), (1, -1)] {
                if let Some(line) = line_from(column, row, dx, dy) {
                    lines.push(line);
                }
            }
        }
    }
    lines
}
