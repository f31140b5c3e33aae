use perfect_play::game::fifteen::{Fifteen, Picks};
use perfect_play::game::pennies::{Pennies, Pile};
use perfect_play::game::tictactoe::TicTacToe;
use perfect_play::{best_move_and_score, score_move, score_moves, Game, Score};
use proptest::prelude::*;

/// Follows `choices` from the start, each one indexing into the legal moves.
fn walk<G: Game>(choices: &[usize]) -> G::State {
    let mut s = G::start();
    for &c in choices {
        let moves = G::moves(&s);
        if moves.is_empty() {
            break;
        }
        s = G::apply_move(&s, &moves[c % moves.len()]).unwrap();
    }
    s
}

fn check_search<G: Game>(s: &G::State) -> Result<(), TestCaseError>
where
    G::Move: std::fmt::Debug,
{
    if G::is_over(s) {
        return Ok(());
    }
    let best = best_move_and_score::<G>(s).unwrap();
    prop_assert_eq!(best_move_and_score::<G>(s).unwrap(), best.clone());

    let scored = score_moves::<G>(s).unwrap();
    for (m, score) in scored.iter() {
        prop_assert!([-1, 0, 1].contains(&score.value()));
        prop_assert!(*score <= best.score);
        let after = G::apply_move(s, m).unwrap();
        if G::is_over(&after) {
            prop_assert_eq!(*score, G::score_finished_game(&after).unwrap());
        } else {
            prop_assert_eq!(*score, -best_move_and_score::<G>(&after).unwrap().score);
        }
        prop_assert_eq!(score_move::<G>(s, m).unwrap(), *score);
    }

    let max = scored.iter().map(|&(_, score)| score).max().unwrap();
    prop_assert_eq!(best.score, max);
    let first = scored.iter().find(|&&(_, score)| score == max).unwrap();
    prop_assert_eq!(&best.play, &first.0);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn tictactoe_search_holds(choices in prop::collection::vec(0usize..9, 2..9)) {
        check_search::<TicTacToe>(&walk::<TicTacToe>(&choices))?;
    }

    #[test]
    fn fifteen_search_holds(choices in prop::collection::vec(0usize..9, 3..9)) {
        check_search::<Fifteen>(&walk::<Fifteen>(&choices))?;
    }

    #[test]
    fn pennies_search_holds(n in 1u32..=12) {
        check_search::<Pennies>(&Pile(n))?;
    }

    #[test]
    fn applying_a_move_leaves_the_state_alone(choices in prop::collection::vec(0usize..9, 0..9)) {
        let s = walk::<Fifteen>(&choices);
        let before: Picks = s.clone();
        for m in Fifteen::moves(&s) {
            let a = Fifteen::apply_move(&s, &m).unwrap();
            let b = Fifteen::apply_move(&s, &m).unwrap();
            prop_assert_eq!(a, b);
        }
        prop_assert_eq!(s, before);
    }

    #[test]
    fn no_moves_exactly_when_scoreable(choices in prop::collection::vec(0usize..9, 0..10)) {
        let s = walk::<TicTacToe>(&choices);
        prop_assert_eq!(TicTacToe::is_over(&s), TicTacToe::score_finished_game(&s).is_ok());
    }
}

#[test]
fn pennies_never_score_a_draw() {
    for n in 1..=10 {
        for (_, score) in score_moves::<Pennies>(&Pile(n)).unwrap() {
            assert_ne!(score, Score::Draw);
        }
    }
}
