//! Look-ahead engine: depth-bounded minimax with random tie-breaking, and
//! the background task that computes the engine's move without stalling the
//! controller thread.

mod minimax;
mod task;

pub use minimax::{auto_choose_move, minimax};
pub use task::MoveTask;
