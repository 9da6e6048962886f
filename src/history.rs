//! Branchable move history: an append-only sequence of board snapshots with
//! a cursor for undo/redo. Diverging after stepping back discards the
//! abandoned future before appending.

use crate::game::GameState;

#[derive(Debug, Clone)]
pub struct History {
    states: Vec<GameState>,
    sp: usize,
}

impl History {
    /// A history seeded with the match's initial state; the cursor starts on
    /// it, so `current()` is always valid.
    pub fn new(initial: GameState) -> Self {
        History {
            states: vec![initial],
            sp: 0,
        }
    }

    /// Append a state after the cursor and move the cursor to it, dropping
    /// any states beyond the cursor first.
    pub fn add(&mut self, state: GameState) {
        self.states.truncate(self.sp + 1);
        self.states.push(state);
        self.sp = self.states.len() - 1;
    }

    /// Step the cursor back one state. Returns `false` at the oldest state.
    pub fn back(&mut self) -> bool {
        if self.sp == 0 {
            return false;
        }
        self.sp -= 1;
        true
    }

    /// Step the cursor forward one state. Returns `false` at the newest.
    pub fn forward(&mut self) -> bool {
        if self.sp + 1 == self.states.len() {
            return false;
        }
        self.sp += 1;
        true
    }

    /// The state under the cursor.
    pub fn current(&self) -> &GameState {
        &self.states[self.sp]
    }

    /// Number of stored states, including the initial one.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// A seeded history is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Cursor position: 0 is the initial state.
    pub fn cursor(&self) -> usize {
        self.sp
    }
}
