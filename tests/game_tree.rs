use perfect_play::game::fifteen::{Fifteen, Picks};
use perfect_play::game::pennies::{Pennies, Pile};
use perfect_play::game::tictactoe::{Board, TicTacToe};
use perfect_play::game_tree::GameTree;
use perfect_play::{best_move_and_score, score_move, Game, Score};

#[test]
fn pennies_tree_shape() {
    let t = GameTree::<Pennies, Score>::solve(&Pile(4)).unwrap();
    assert_eq!(t.size(), 15);
    assert_eq!(t.depth(), 4);
    assert_eq!(t.order, vec![1, 2, 3]);
}

#[test]
fn finished_game_is_a_leaf() {
    let t = GameTree::<Pennies, Score>::solve(&Pile(0)).unwrap();
    assert_eq!(t.size(), 1);
    assert_eq!(t.depth(), 0);
    assert_eq!(t.value, Score::Win);
    assert!(t.best().is_none());
}

#[test]
fn pennies_start_tree_size() {
    let t = GameTree::<Pennies, Score>::solve(&Pennies::start()).unwrap();
    assert_eq!(t.size(), 6872);
    assert_eq!(t.depth(), 14);
}

#[test]
fn child_values_match_move_scores() {
    let s: Board = "X   O    ".parse().unwrap();
    let t = GameTree::<TicTacToe, Score>::solve(&s).unwrap();
    for m in TicTacToe::moves(&s) {
        assert_eq!(t.children[&m].value, score_move::<TicTacToe>(&s, &m).unwrap());
    }
    let best = best_move_and_score::<TicTacToe>(&s).unwrap();
    assert_eq!(t.best(), Some((&best.play, best.score)));
    assert_eq!(t.value, -best.score);
}

#[test]
fn fifteen_tree_agrees_with_search() {
    let s = Picks::new(vec![7, 5], vec![6]);
    let t = GameTree::<Fifteen, Score>::solve(&s).unwrap();
    assert_eq!(t.best(), Some((&3, Score::Draw)));
    assert_eq!(t.value, Score::Draw);
}

#[test]
fn tree_can_be_debug_printed() {
    let t = GameTree::<Pennies, Score>::solve(&Pile(1)).unwrap();
    let text = format!("{:?}", t);
    assert!(text.starts_with("GameTree { value: Loss"));
    assert!(text.contains("order: [1]"));
    assert!(text.contains("value: Win"));
}
