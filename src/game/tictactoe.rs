use crate::error::{Error, Result};
use crate::game::{Game, Score};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

pub struct TicTacToe;

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Cell {
    Empty,
    X,
    O,
}
use self::Cell::*;

impl Cell {
    fn to_char(self) -> char {
        match self {
            Empty => ' ',
            X => 'X',
            O => 'O',
        }
    }
}

const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [0, 3, 6],
    [0, 4, 8],
    [1, 4, 7],
    [2, 4, 6],
    [2, 5, 8],
    [3, 4, 5],
    [6, 7, 8],
];

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Board(pub [Cell; 9]);

impl Board {
    pub fn empty() -> Self {
        Board([Empty; 9])
    }

    /// The mark with three in a row, if any.
    pub fn winner(&self) -> Option<Cell> {
        TRIPLES.iter().find_map(|t| {
            let p = self.0[t[0]];
            if p != Empty && self.0[t[1]] == p && self.0[t[2]] == p {
                Some(p)
            } else {
                None
            }
        })
    }

    /// X moves whenever an even number of cells are taken.
    pub fn to_move(&self) -> Cell {
        if self.0.iter().filter(|&&c| c != Empty).count() % 2 == 0 {
            X
        } else {
            O
        }
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidBoard {
            board: s.to_string(),
            reason,
        };
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(invalid(format!("expected 9 cells, got {}", chars.len())));
        }
        let mut cells = [Empty; 9];
        for (i, c) in chars.into_iter().enumerate() {
            cells[i] = match c {
                ' ' => Empty,
                'X' => X,
                'O' => O,
                other => return Err(invalid(format!("unexpected '{}' at {}", other, i))),
            };
        }
        Ok(Board(cells))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut rows = (0..3).map(|y| {
            (0..3)
                .map(|x| {
                    let i = y * 3 + x;
                    match self.0[i] {
                        Empty => format!(" {} ", i),
                        c => format!(" {} ", c.to_char()),
                    }
                })
                .join("|")
        });
        writeln!(f, "{}", rows.join("\n-----------\n"))
    }
}

impl Game for TicTacToe {
    type Move = usize;
    type State = Board;

    const NAME: &'static str = "TicTacToe";

    fn start() -> Self::State {
        Board::empty()
    }

    fn moves(s: &Self::State) -> Vec<Self::Move> {
        if s.winner().is_some() {
            Vec::new()
        } else {
            (0..9).filter(|&i| s.0[i] == Empty).collect()
        }
    }

    fn apply_move(s: &Self::State, m: &Self::Move) -> Result<Self::State> {
        if s.winner().is_some() || *m >= 9 || s.0[*m] != Empty {
            return Err(Error::illegal(m));
        }
        let mut next = *s;
        next.0[*m] = s.to_move();
        Ok(next)
    }

    fn score_finished_game(s: &Self::State) -> Result<Score> {
        match s.winner() {
            Some(_) => Ok(Score::Win),
            None if s.0.iter().all(|&c| c != Empty) => Ok(Score::Draw),
            None => Err(Error::GameNotOver),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn finished_boards() {
        assert!(TicTacToe::moves(&board("XOXOXOX  ")).is_empty());
        assert_eq!(TicTacToe::score_finished_game(&board("XOXOXOX  ")), Ok(Score::Win));
        assert!(TicTacToe::moves(&board("XO XO X  ")).is_empty());
        assert_eq!(TicTacToe::score_finished_game(&board("XO XO X  ")), Ok(Score::Win));
        assert!(TicTacToe::moves(&board("XOXOXXOXO")).is_empty());
        assert_eq!(TicTacToe::score_finished_game(&board("XOXOXXOXO")), Ok(Score::Draw));
    }

    #[test]
    fn open_cells_are_moves() {
        assert_eq!(TicTacToe::moves(&board("XOXOXO X ")), vec![6, 8]);
        assert_eq!(
            TicTacToe::score_finished_game(&board("XOXOXO X ")),
            Err(Error::GameNotOver)
        );
    }

    #[test]
    fn marks_alternate() {
        let b = TicTacToe::apply_move(&Board::empty(), &4).unwrap();
        assert_eq!(b, board("    X    "));
        let b = TicTacToe::apply_move(&b, &0).unwrap();
        assert_eq!(b, board("O   X    "));
        assert!(TicTacToe::apply_move(&b, &4).is_err());
        assert!(TicTacToe::apply_move(&b, &9).is_err());
    }

    #[test]
    fn bad_boards_do_not_parse() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XOXOXOXO?".parse::<Board>().is_err());
    }

    #[test]
    fn rendering() {
        assert_eq!(
            board("X   O    ").to_string(),
            " X | 1 | 2 \n-----------\n 3 | O | 5 \n-----------\n 6 | 7 | 8 \n"
        );
    }
}
