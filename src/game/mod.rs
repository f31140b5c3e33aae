pub mod fifteen;
pub mod pennies;
pub mod tictactoe;

use crate::error::Result;
use std::fmt;
use std::hash::Hash;
use std::ops::Neg;

/// Outcome of a finished game, relative to the player who made the last move.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Score {
    Loss = -1,
    Draw = 0,
    Win = 1,
}

impl Score {
    pub fn value(self) -> i8 {
        self as i8
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        match self {
            Score::Loss => Score::Win,
            Score::Draw => Score::Draw,
            Score::Win => Score::Loss,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Score::Draw => f.write_str("0"),
            _ => write!(f, "{:+}", self.value()),
        }
    }
}

/// Rules of a finite, deterministic two-player game.
///
/// A state is always seen from the side of the player to act. `moves` must
/// return an empty list exactly when the game is over; the search has no other
/// way of telling.
pub trait Game {
    type Move: Eq + Hash + Clone + fmt::Display;
    type State: Eq + Hash + Clone + fmt::Display;

    const NAME: &'static str;

    fn start() -> Self::State;
    fn moves(s: &Self::State) -> Vec<Self::Move>;
    /// The position after `m`, seen by the player who acts next.
    fn apply_move(s: &Self::State, m: &Self::Move) -> Result<Self::State>;
    /// Only defined for a finished game.
    fn score_finished_game(s: &Self::State) -> Result<Score>;

    fn is_over(s: &Self::State) -> bool {
        Self::moves(s).is_empty()
    }

    fn describe_move(_s: &Self::State, m: &Self::Move) -> String {
        format!("My move is: {}", m)
    }

    /// Text shown to a human who took the first seat, or the second one
    /// when `human_first` is false.
    fn render(s: &Self::State, _human_first: bool) -> String {
        s.to_string()
    }
}

/// Rejects `m` unless it is one of the legal moves in `s`.
pub fn check_legal<G: Game>(s: &G::State, m: &G::Move) -> Result<()> {
    if G::moves(s).contains(m) {
        Ok(())
    } else {
        Err(crate::error::Error::illegal(m))
    }
}

/// The bundled games.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, clap::ValueEnum)]
pub enum GameKind {
    #[value(name = "tictactoe")]
    TicTacToe,
    Pennies,
    Fifteen,
}

#[cfg(test)]
mod tests {
    use super::Score;

    #[test]
    fn negation_flips_perspective() {
        assert_eq!(-Score::Win, Score::Loss);
        assert_eq!(-Score::Loss, Score::Win);
        assert_eq!(-Score::Draw, Score::Draw);
    }

    #[test]
    fn ordering_follows_value() {
        assert!(Score::Loss < Score::Draw && Score::Draw < Score::Win);
        assert_eq!(Score::Loss.value(), -1);
        assert_eq!(Score::Win.to_string(), "+1");
    }
}
