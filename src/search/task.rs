use std::thread::{self, JoinHandle};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::GameState;

use super::minimax::auto_choose_move;

/// A single engine-move computation that can run off the controller thread.
///
/// The task owns a snapshot of the position by value; the search reads only
/// that snapshot and the immutable line table, so nothing is shared with the
/// controller while it runs. One task computes one move: [`start`] may be
/// called at most once, and [`wait`] consumes the task.
///
/// [`start`]: MoveTask::start
/// [`wait`]: MoveTask::wait
pub struct MoveTask {
    state: GameState,
    handle: Option<JoinHandle<Option<GameState>>>,
}

impl MoveTask {
    pub fn new(state: GameState) -> Self {
        MoveTask {
            state,
            handle: None,
        }
    }

    /// Launch the search on a background thread and return immediately.
    ///
    /// # Panics
    /// Panics if the search was already started; callers own the
    /// single-flight discipline.
    pub fn start(&mut self, depth: u32) {
        assert!(self.handle.is_none(), "move search already started");
        let state = self.state;
        self.handle = Some(thread::spawn(move || {
            let mut rng = StdRng::from_os_rng();
            auto_choose_move(&state, depth, &mut rng)
        }));
    }

    /// Whether a started search has completed. Always `false` before
    /// [`start`](MoveTask::start); never blocks.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| h.is_finished())
    }

    /// Block until the search completes and return the chosen state, running
    /// it synchronously if it was never started. `None` means the position
    /// has no legal move.
    pub fn wait(mut self, depth: u32) -> Option<GameState> {
        match self.handle.take() {
            Some(handle) => handle.join().expect("move search thread panicked"),
            None => {
                let mut rng = StdRng::from_os_rng();
                auto_choose_move(&self.state, depth, &mut rng)
            }
        }
    }
}
