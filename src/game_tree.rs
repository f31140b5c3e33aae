use crate::error::Result;
use crate::game::{Game, Score};
use fnv::FnvHashMap;
use std::fmt;

pub struct GameTree<G: Game, T> {
    pub value: T,
    pub children: FnvHashMap<G::Move, GameTree<G, T>>,
    /// Child moves in the order the game listed them.
    pub order: Vec<G::Move>,
}

impl<G: Game, T: fmt::Debug> fmt::Debug for GameTree<G, T>
where
    G::Move: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("GameTree")
            .field("value", &self.value)
            .field("children", &self.children)
            .field("order", &self.order)
            .finish()
    }
}

impl<G: Game, T> GameTree<G, T> {
    pub fn size(&self) -> usize {
        1 + self.children.values().map(|c| c.size()).sum::<usize>()
    }

    /// Length of the longest line of play, in plies.
    pub fn depth(&self) -> usize {
        self.children
            .values()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl<G: Game> GameTree<G, Score> {
    /// Expands every line of play from `s`.
    ///
    /// Each node holds the outcome for the player whose move led to it, so a
    /// child's value is the score of the move that reaches it.
    pub fn solve(s: &G::State) -> Result<Self> {
        let order = G::moves(s);
        if order.is_empty() {
            return Ok(GameTree {
                value: G::score_finished_game(s)?,
                children: FnvHashMap::default(),
                order,
            });
        }
        let mut children = FnvHashMap::default();
        for m in order.iter() {
            let after = G::apply_move(s, m)?;
            children.insert(m.clone(), Self::solve(&after)?);
        }
        // the opponent's best reply decides our outcome
        let value = children
            .values()
            .map(|c| -c.value)
            .fold(Score::Win, std::cmp::min);
        Ok(GameTree {
            value,
            children,
            order,
        })
    }

    /// First move in game order with the highest child value.
    pub fn best(&self) -> Option<(&G::Move, Score)> {
        let mut best: Option<(&G::Move, Score)> = None;
        for m in self.order.iter() {
            if let Some(child) = self.children.get(m) {
                if best.map_or(true, |(_, v)| child.value > v) {
                    best = Some((m, child.value));
                }
            }
        }
        best
    }
}
