pub mod error;

pub mod game;

pub mod game_tree;

pub mod search;

pub mod session;

pub mod strategy;

pub use error::{Error, Result};
pub use game::{Game, GameKind, Score};
pub use search::{best_move_and_score, score_move, score_moves, Best};
