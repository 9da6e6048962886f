//! Core Connect Four game logic: the precomputed winning-line table, the
//! immutable board snapshot with its pure move transition, and the scorer
//! the search engine evaluates positions with.

mod lines;
mod player;
mod score;
mod state;

pub use lines::{cell_index, col_row, Line, ALL_LINES, COLUMNS, PLAYERS, ROWS, TARGET};
pub use player::{Cell, Player};
pub use score::{score, LOST, WON};
pub use state::{GameState, LastMove, MoveError};
