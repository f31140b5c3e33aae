//! Move choosers and a harness for playing them against each other.

use crate::error::{Error, Result};
use crate::game::{Game, Score};
use crate::search;
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks a move for the player to act.
pub trait Strategy<G: Game> {
    fn choose_move(&mut self, s: &G::State) -> Result<G::Move>;
}

/// Always plays the first best move.
pub struct Perfect;

impl<G: Game> Strategy<G> for Perfect {
    fn choose_move(&mut self, s: &G::State) -> Result<G::Move> {
        Ok(search::best_move_and_score::<G>(s)?.play)
    }
}

/// Plays any legal move with equal probability.
pub struct Random<R> {
    rng: R,
}

impl<R: Rng> Random<R> {
    pub fn new(rng: R) -> Self {
        Random { rng }
    }
}

impl<G: Game, R: Rng> Strategy<G> for Random<R> {
    fn choose_move(&mut self, s: &G::State) -> Result<G::Move> {
        G::moves(s)
            .choose(&mut self.rng)
            .cloned()
            .ok_or(Error::GameOver)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Outcome {
    FirstWon,
    SecondWon,
    Draw,
}

impl Outcome {
    /// The same result with the seats exchanged.
    pub fn swapped(self) -> Outcome {
        match self {
            Outcome::FirstWon => Outcome::SecondWon,
            Outcome::SecondWon => Outcome::FirstWon,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

/// Plays a complete game from `start`, `first` moving first.
pub fn battle<G, S1, S2>(start: G::State, first: &mut S1, second: &mut S2) -> Result<Outcome>
where
    G: Game,
    S1: Strategy<G>,
    S2: Strategy<G>,
{
    let mut state = start;
    let strategies: [&mut dyn Strategy<G>; 2] = [first, second];
    let mut s = 0;
    // `s` is the side that made the last move once the loop ends
    loop {
        let m = strategies[s].choose_move(&state)?;
        state = G::apply_move(&state, &m)?;
        if G::is_over(&state) {
            break;
        }
        s = 1 - s;
    }
    let outcome = match (G::score_finished_game(&state)?, s) {
        (Score::Draw, _) => Outcome::Draw,
        (Score::Win, 0) | (Score::Loss, 1) => Outcome::FirstWon,
        _ => Outcome::SecondWon,
    };
    log::debug!("{} finished: {:?}", G::NAME, outcome);
    Ok(outcome)
}
