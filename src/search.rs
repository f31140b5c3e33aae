//! Exhaustive minimax over any [`Game`].
//!
//! Every line of play below the given state is explored; there is no pruning
//! and nothing is cached. Recursion goes one level per remaining ply, so the
//! stack grows with the longest possible game from the searched state.

use crate::error::{Error, Result};
use crate::game::{Game, Score};

/// The first move found with the best achievable score.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Best<M> {
    pub play: M,
    pub score: Score,
}

/// Value of playing `m` in `s`, for the player making the move.
pub fn score_move<G: Game>(s: &G::State, m: &G::Move) -> Result<Score> {
    let after = G::apply_move(s, m)?;
    let score = if G::is_over(&after) {
        G::score_finished_game(&after)?
    } else {
        // `after` is what the opponent sees; their best is our worst
        -best_move_and_score::<G>(&after)?.score
    };
    log::trace!("{:<8}{:<4}{}", G::NAME, m, score);
    Ok(score)
}

/// Best move for the player to act in `s`.
///
/// Moves are tried in the order `G::moves` lists them and only a strictly
/// better score replaces the current choice, so ties go to the earliest move.
/// A finished game has no best move and yields [`Error::GameOver`].
pub fn best_move_and_score<G: Game>(s: &G::State) -> Result<Best<G::Move>> {
    let mut best: Option<Best<G::Move>> = None;
    for m in G::moves(s) {
        let score = score_move::<G>(s, &m)?;
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(Best { play: m, score });
        }
    }
    best.ok_or(Error::GameOver)
}

/// Every legal move in `s` paired with its score, in move order.
pub fn score_moves<G: Game>(s: &G::State) -> Result<Vec<(G::Move, Score)>> {
    let scored = G::moves(s)
        .into_iter()
        .map(|m| score_move::<G>(s, &m).map(|score| (m, score)))
        .collect::<Result<Vec<_>>>()?;
    log::debug!("scored {} moves for {}", scored.len(), G::NAME);
    Ok(scored)
}
