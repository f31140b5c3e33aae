// Numbers 1 to 9 sit on the table and players take turns picking one. The
// first to hold exactly three numbers adding up to 15 wins.

use crate::error::{Error, Result};
use crate::game::{Game, Score};
use itertools::Itertools;
use std::fmt;

pub struct Fifteen;

/// Numbers picked so far by the first and the second player, in pick order.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Default)]
pub struct Picks(pub [Vec<u8>; 2]);

fn sums_to_fifteen(ns: &[u8]) -> bool {
    ns.iter()
        .tuple_combinations()
        .any(|(a, b, c)| a + b + c == 15)
}

impl Picks {
    pub fn new(first: Vec<u8>, second: Vec<u8>) -> Self {
        Picks([first, second])
    }

    /// Index of the player holding a winning triple.
    pub fn winner(&self) -> Option<usize> {
        (0..2).find(|&p| sums_to_fifteen(&self.0[p]))
    }

    /// The first player picks whenever both have picked equally often.
    pub fn to_move(&self) -> usize {
        if self.0[0].len() == self.0[1].len() {
            0
        } else {
            1
        }
    }

    pub fn on_table(&self) -> Vec<u8> {
        (1..10)
            .filter(|n| !self.0[0].contains(n) && !self.0[1].contains(n))
            .collect()
    }

    /// Lists the picks with `human`'s seat as "Your numbers".
    pub fn render_for(&self, human: usize) -> String {
        format!(
            "Your numbers: {}\nMy numbers: {}\nNumbers still on the table: {}\n",
            self.0[human].iter().join(", "),
            self.0[1 - human].iter().join(", "),
            Fifteen::moves(self).iter().join(", ")
        )
    }
}

impl fmt::Display for Picks {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render_for(0))
    }
}

impl Game for Fifteen {
    type Move = u8;
    type State = Picks;

    const NAME: &'static str = "Fifteen";

    fn start() -> Self::State {
        Picks::default()
    }

    fn moves(s: &Self::State) -> Vec<Self::Move> {
        if s.winner().is_some() {
            Vec::new()
        } else {
            s.on_table()
        }
    }

    fn apply_move(s: &Self::State, m: &Self::Move) -> Result<Self::State> {
        if s.winner().is_some() || !s.on_table().contains(m) {
            return Err(Error::illegal(m));
        }
        let mut next = s.clone();
        next.0[s.to_move()].push(*m);
        Ok(next)
    }

    fn render(s: &Self::State, human_first: bool) -> String {
        s.render_for(if human_first { 0 } else { 1 })
    }

    fn score_finished_game(s: &Self::State) -> Result<Score> {
        match s.winner() {
            // only the player who just picked can have completed a triple
            Some(_) => Ok(Score::Win),
            None if s.on_table().is_empty() => Ok(Score::Draw),
            None => Err(Error::GameNotOver),
        }
    }
}
