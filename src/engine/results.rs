//! Win/loss badges for scheduled games.

use crate::model::{GameResult, GameStatus, ScheduledGame, Side};

/// Final status code, or a detailed state mentioning Final/Completed
/// ("Final", "Game Over: Final", "Completed Early").
pub fn is_final(status: &GameStatus) -> bool {
    status.code.as_deref() == Some("F")
        || status.detailed_state.contains("Final")
        || status.detailed_state.contains("Completed")
}

/// Outcome of `game` from `side`'s point of view.
///
/// A game is decided only once it is final and either this side carries a
/// winner flag or both scores are known. Scores win over the flag when both
/// are present; anything undecided is `NoDecision`.
pub fn derive_result(game: &ScheduledGame, side: Side) -> GameResult {
    if !is_final(&game.status) {
        return GameResult::NoDecision;
    }

    let own = game.side(side);
    let other = game.side(side.opponent());
    match (own.score, other.score, own.is_winner) {
        (Some(ours), Some(theirs), _) => match ours.cmp(&theirs) {
            std::cmp::Ordering::Greater => GameResult::Win,
            std::cmp::Ordering::Less => GameResult::Loss,
            std::cmp::Ordering::Equal => GameResult::Draw,
        },
        (_, _, Some(true)) => GameResult::Win,
        (_, _, Some(false)) => GameResult::Loss,
        _ => GameResult::NoDecision,
    }
}

/// Side whose upstream winner flag is set. Scores alone never pick one.
pub fn winner_side(game: &ScheduledGame) -> Option<Side> {
    [Side::Home, Side::Away]
        .into_iter()
        .find(|&side| game.side(side).is_winner == Some(true))
}
