//! Turn bookkeeping for a human playing against the computer.
//!
//! Nothing here feeds back into the search: whether a game is over and who
//! gets the credit is derived from a state, never stored inside it.

use crate::error::{Error, Result};
use crate::game::{check_legal, Game, Score};
use crate::search;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Status {
    InProgress,
    Won(Side),
    Tie,
}

/// Where `s` leaves the game, given that `last` made the move leading to it.
pub fn annotate<G: Game>(s: &G::State, last: Side) -> Result<Status> {
    if !G::is_over(s) {
        return Ok(Status::InProgress);
    }
    Ok(match G::score_finished_game(s)? {
        Score::Win => Status::Won(last),
        Score::Loss => Status::Won(last.other()),
        Score::Draw => Status::Tie,
    })
}

/// One game in progress. Each turn returns the next session and leaves the
/// previous one untouched.
pub struct Session<G: Game> {
    pub state: G::State,
    pub status: Status,
}

impl<G: Game> Session<G> {
    pub fn new() -> Self {
        Session {
            state: G::start(),
            status: Status::InProgress,
        }
    }

    /// Picks a game up from an arbitrary position that is still being played.
    pub fn with_state(state: G::State) -> Result<Self> {
        if G::is_over(&state) {
            return Err(Error::GameOver);
        }
        Ok(Session {
            state,
            status: Status::InProgress,
        })
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    pub fn human_turn(&self, m: &G::Move) -> Result<Self> {
        self.ensure_running()?;
        check_legal::<G>(&self.state, m)?;
        let state = G::apply_move(&self.state, m)?;
        let status = annotate::<G>(&state, Side::Human)?;
        log::debug!("human played {} in {}: {:?}", m, G::NAME, status);
        Ok(Session { state, status })
    }

    pub fn computer_turn(&self) -> Result<(G::Move, Self)> {
        self.ensure_running()?;
        let best = search::best_move_and_score::<G>(&self.state)?;
        let state = G::apply_move(&self.state, &best.play)?;
        let status = annotate::<G>(&state, Side::Computer)?;
        log::debug!(
            "computer played {} in {} expecting {}: {:?}",
            best.play,
            G::NAME,
            best.score,
            status
        );
        Ok((best.play, Session { state, status }))
    }

    fn ensure_running(&self) -> Result<()> {
        if self.is_over() {
            Err(Error::GameOver)
        } else {
            Ok(())
        }
    }
}

impl<G: Game> Default for Session<G> {
    fn default() -> Self {
        Self::new()
    }
}
