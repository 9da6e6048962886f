use rand::Rng;

use crate::game::{score, GameState, Player, COLUMNS};

/// Depth-bounded minimax over [`GameState`] transitions. No pruning: every
/// node tries all 7 columns, skipping illegal ones. Returns the child state
/// of the best first move, or `None` when no legal move exists.
///
/// Tied best moves are all retained and one is drawn uniformly from `rng`,
/// so symmetric openings do not collapse onto the first column scanned. The
/// best *value* is deterministic; only the choice among equals varies.
pub fn minimax<R: Rng>(
    state: &GameState,
    depth: u32,
    orig_player: Player,
    rng: &mut R,
) -> Option<GameState> {
    search(state, depth, orig_player, rng).1
}

/// Search on behalf of whichever player is to move in `state`.
pub fn auto_choose_move<R: Rng>(state: &GameState, depth: u32, rng: &mut R) -> Option<GameState> {
    minimax(state, depth, state.turn(), rng)
}

fn search<R: Rng>(
    state: &GameState,
    depth: u32,
    orig_player: Player,
    rng: &mut R,
) -> (i64, Option<GameState>) {
    if depth == 0 || state.finished() {
        // Remaining depth as bias: terminals found higher in the tree
        // strictly outrank the same terminal found deeper.
        let (value, _) = score(state, orig_player, depth as i64);
        return (value, None);
    }

    let maximizing = state.turn() == orig_player;
    let mut best_value = if maximizing { i64::MIN } else { i64::MAX };
    let mut best_moves: Vec<GameState> = Vec::new();

    for column in 0..COLUMNS {
        let Ok(next) = state.make_move(column) else {
            continue;
        };
        let (value, _) = search(&next, depth - 1, orig_player, rng);
        let improves = if maximizing {
            value > best_value
        } else {
            value < best_value
        };
        if improves {
            best_value = value;
            best_moves.clear();
            best_moves.push(next);
        } else if value == best_value {
            best_moves.push(next);
        }
    }

    if best_moves.is_empty() {
        // Unreachable for a consistent state: a board with no legal column
        // is full, hence finished, hence caught by the base case.
        let (value, _) = score(state, orig_player, depth as i64);
        return (value, None);
    }

    let choice = best_moves[rng.random_range(0..best_moves.len())];
    (best_value, Some(choice))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MoveError, LOST, ROWS, WON};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn state_after(moves: &[usize]) -> GameState {
        let mut state = GameState::new();
        for &column in moves {
            state = state.make_move(column).unwrap();
        }
        state
    }

    #[test]
    fn takes_an_immediate_vertical_win() {
        // Red has three in column 3; any depth >= 1 must complete it.
        let state = state_after(&[3, 0, 3, 1, 3, 2]);
        for depth in 1u32..=4 {
            let mut rng = StdRng::seed_from_u64(depth as u64);
            let next = minimax(&state, depth, Player::Red, &mut rng)
                .expect("a legal move exists");
            assert!(next.finished(), "depth {depth} missed the win");
            assert_eq!(next.last_move().unwrap().column, 3);
            let (value, _) = score(&next, Player::Red, 0);
            assert_eq!(value, WON);
        }
    }

    #[test]
    fn blocks_an_immediate_loss() {
        // Yellow threatens 0,1,2 on the bottom row; Red must play column 3.
        let state = state_after(&[6, 0, 6, 1, 5, 2]);
        let mut rng = StdRng::seed_from_u64(7);
        let next = minimax(&state, 4, Player::Red, &mut rng).unwrap();
        assert_eq!(next.last_move().unwrap().column, 3);
    }

    #[test]
    fn prefers_winning_over_blocking() {
        // Both sides threaten column 3; Red to move should take the win,
        // not block.
        let state = state_after(&[0, 0, 1, 1, 2, 2]);
        let mut rng = StdRng::seed_from_u64(11);
        let next = minimax(&state, 4, Player::Red, &mut rng).unwrap();
        assert!(next.finished());
        assert_eq!(next.last_move().unwrap().player, Player::Red);
    }

    #[test]
    fn faster_win_outranks_slower_win() {
        // With the bias, a win one ply away scores WON + (depth - 1),
        // strictly above any win found deeper in the tree.
        let state = state_after(&[3, 0, 3, 1, 3, 2]);
        let mut rng = StdRng::seed_from_u64(3);
        let (value, _) = search(&state, 4, Player::Red, &mut rng);
        assert_eq!(value, WON + 3);
    }

    #[test]
    fn forced_loss_is_reported_as_lost() {
        // Yellow has an open three 1,2,3 with both ends free; Red cannot
        // cover 0 and 4 at once.
        let state = state_after(&[6, 1, 6, 2, 5, 3]);
        let mut rng = StdRng::seed_from_u64(5);
        let (value, _) = search(&state, 4, Player::Red, &mut rng);
        // Loss band: LOST plus at most the full remaining depth of bias.
        assert!(value <= LOST + 4, "expected a forced loss, got {value}");
    }

    #[test]
    fn no_move_on_a_finished_game() {
        let state = state_after(&[3, 0, 3, 1, 3, 2, 3]);
        assert!(state.finished());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(minimax(&state, 4, Player::Yellow, &mut rng).is_none());
    }

    #[test]
    fn returned_move_is_always_legal() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut state = GameState::new();
        while !state.finished() {
            let next = auto_choose_move(&state, 2, &mut rng).expect("legal move");
            let mv = next.last_move().unwrap();
            assert!(mv.column < COLUMNS && mv.row < ROWS);
            assert_eq!(state.make_move(mv.column).as_ref(), Ok(&next));
            state = next;
        }
        assert!(matches!(
            state.make_move(0),
            Err(MoveError::GameOver | MoveError::ColumnFull)
        ));
    }

    #[test]
    fn tie_break_spreads_over_tied_winning_columns() {
        // Red threatens mate in columns 1 and 5 at once; both score exactly
        // WON + 1 at depth 2, so over many seeds the engine must pick each
        // of them, never a third, and never the same one every time.
        let state = state_after(&[1, 0, 1, 0, 1, 0, 5, 6, 5, 6, 5, 6]);
        let mut chosen = HashSet::new();
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let next = minimax(&state, 2, Player::Red, &mut rng).unwrap();
            let column = next.last_move().unwrap().column;
            assert!(
                column == 1 || column == 5,
                "picked non-optimal column {column}"
            );
            chosen.insert(column);
        }
        assert_eq!(
            chosen,
            HashSet::from([1, 5]),
            "tie-break must reach every tied optimum"
        );
    }

    #[test]
    fn seeded_search_is_reproducible() {
        let state = GameState::new();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            minimax(&state, 3, Player::Red, &mut a),
            minimax(&state, 3, Player::Red, &mut b)
        );
    }
}
