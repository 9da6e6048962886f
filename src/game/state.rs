use super::lines::{cell_index, COLUMNS, ROWS};
use super::score::{score, WON};
use super::{Cell, Player};

/// The move that produced a state: where the token landed and who dropped it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub column: usize,
    pub row: usize,
    pub player: Player,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column out of range")]
    InvalidColumn,

    #[error("column is full")]
    ColumnFull,

    #[error("game is already over")]
    GameOver,
}

/// One immutable snapshot of a match. Every transition copies the whole
/// value; snapshots share no storage, so history entries and in-flight
/// searches can never alias each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    cells: [Cell; COLUMNS * ROWS],
    heights: [usize; COLUMNS],
    turn: Player,
    finished: bool,
    winning_line: Option<usize>,
    last_move: Option<LastMove>,
}

impl GameState {
    /// Empty board, Red to move.
    pub fn new() -> Self {
        GameState {
            cells: [Cell::Empty; COLUMNS * ROWS],
            heights: [0; COLUMNS],
            turn: Player::Red,
            finished: false,
            winning_line: None,
            last_move: None,
        }
    }

    /// Cell occupant at `(column, row)`. Row 0 is the bottom row.
    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.cells[cell_index(column, row)]
    }

    /// Cell occupant at a linear index.
    pub fn cell_at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Number of tokens stacked in each column.
    pub fn heights(&self) -> &[usize; COLUMNS] {
        &self.heights
    }

    /// Player who makes the next move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Whether the match has ended (win or draw).
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Index into [`super::ALL_LINES`] of the winning run, if the match
    /// ended with a win.
    pub fn winning_line(&self) -> Option<usize> {
        self.winning_line
    }

    /// The move that produced this state, absent for the initial state.
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Drop the mover's token into `column` and return the resulting state.
    /// Pure: the receiver is left untouched.
    pub fn make_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.finished {
            return Err(MoveError::GameOver);
        }
        if column >= COLUMNS {
            return Err(MoveError::InvalidColumn);
        }
        if self.heights[column] == ROWS {
            return Err(MoveError::ColumnFull);
        }

        let row = self.heights[column];
        let mover = self.turn;

        let mut next = *self;
        next.cells[cell_index(column, row)] = mover.to_cell();
        next.heights[column] += 1;
        next.turn = mover.other();
        next.last_move = Some(LastMove {
            column,
            row,
            player: mover,
        });

        // Win detection is a raw single-ply check: no depth bias here.
        let (value, line) = score(&next, mover, 0);
        if value == WON {
            next.finished = true;
            next.winning_line = line;
        } else if next.heights.iter().all(|&h| h == ROWS) {
            next.finished = true;
        }

        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
