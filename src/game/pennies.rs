use crate::error::{Error, Result};
use crate::game::{Game, Score};
use std::cmp::min;
use std::fmt;

pub struct Pennies;

/// Number of pennies still on the table.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Pile(pub u32);

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "There is just 1 penny left.")
        } else {
            write!(f, "There are {} pennies left.", self.0)
        }
    }
}

impl Game for Pennies {
    type Move = u32;
    type State = Pile;

    const NAME: &'static str = "Pennies";

    fn start() -> Self::State {
        Pile(14)
    }

    fn moves(s: &Self::State) -> Vec<Self::Move> {
        (1..(min(3, s.0) + 1)).collect()
    }

    fn apply_move(s: &Self::State, m: &Self::Move) -> Result<Self::State> {
        if *m < 1 || *m > min(3, s.0) {
            return Err(Error::illegal(m));
        }
        Ok(Pile(s.0 - m))
    }

    fn score_finished_game(s: &Self::State) -> Result<Score> {
        if s.0 == 0 {
            // whoever took the last penny
            Ok(Score::Win)
        } else {
            Err(Error::GameNotOver)
        }
    }

    fn describe_move(s: &Self::State, m: &Self::Move) -> String {
        let what = match (*m == s.0, *m) {
            (true, 1) => "one".to_string(),
            (true, 2) => "them both".to_string(),
            (true, _) => "all three".to_string(),
            (false, 1) => "1 penny".to_string(),
            (false, n) => format!("{} pennies", n),
        };
        format!("I'll take {}.", what)
    }
}
