use super::lines::{ALL_LINES, TARGET};
use super::{Cell, GameState, Player};

pub const WON: i64 = 999_999_999;
pub const LOST: i64 = -999_999_999;

/// Evaluate `state` from `target`'s perspective.
///
/// Walks every line in the table. A line is abandoned the moment it holds a
/// token of the player not being counted; a full count of [`TARGET`] ends the
/// scan immediately with `WON + depth_bias` (and the line's index) when the
/// completing player is `target`, or `LOST + depth_bias` otherwise. If no
/// line is complete, the sum of `count²` over `target`'s lines is returned
/// as the heuristic, rewarding open twos and threes superlinearly.
///
/// The bias is only ever non-zero inside recursive search, where it ranks
/// terminals found higher in the tree above deeper ones. The single-ply win
/// check in `make_move` passes 0 and compares against raw [`WON`].
pub fn score(state: &GameState, target: Player, depth_bias: i64) -> (i64, Option<usize>) {
    let mut heuristic = 0i64;
    for (line_idx, line) in ALL_LINES.iter().enumerate() {
        for player in [Player::Red, Player::Yellow] {
            let own = player.to_cell();
            let mut count = 0i64;
            for &cell_idx in line {
                match state.cell_at(cell_idx) {
                    c if c == own => count += 1,
                    Cell::Empty => {}
                    _ => {
                        count = 0;
                        break;
                    }
                }
            }
            if count == TARGET as i64 {
                if player == target {
                    return (WON + depth_bias, Some(line_idx));
                }
                return (LOST + depth_bias, None);
            }
            if player == target {
                heuristic += count * count;
            }
        }
    }
    (heuristic, None)
}
