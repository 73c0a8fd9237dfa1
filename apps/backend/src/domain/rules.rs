//! Move resolution: the one piece of game logic that is not glue.

use crate::entities::games::{GameResult, Move};

/// Resolve a completed move pair into a result.
///
/// Equal moves draw; otherwise the cyclic dominance
/// rock > scissors > paper > rock decides, and the winning side is the
/// result. Total over all nine pairs.
pub fn resolve(left: Move, right: Move) -> GameResult {
    if left == right {
        GameResult::Draw
    } else if beats(left, right) {
        GameResult::WinLeft
    } else {
        GameResult::WinRight
    }
}

fn beats(a: Move, b: Move) -> bool {
    matches!(
        (a, b),
        (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
    )
}
