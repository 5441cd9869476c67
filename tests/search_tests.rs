//! Tests for the driver-facing `SearchTree`: budgeted runs, best-move
//! extraction, tree reuse, and error surfacing.

mod common;

use std::time::Duration;

use common::{near_win_board, one_move_from_win, won_board, Mark, Move, TicTacToe};
use uct_search::{GameState, SearchConfig, SearchError, SearchTree};

#[test]
fn run_returns_the_only_winning_move() {
    let config = SearchConfig::default().with_max_iterations(50);
    let mut tree = SearchTree::new(one_move_from_win(), Mark::X, config);

    let action = tree.run().unwrap();

    assert_eq!(action, Move(8));
    let stats = tree.statistics();
    assert_eq!(stats.iterations, 50);
    assert_eq!(stats.tree_size, 2);
    assert_eq!(stats.max_depth, 1);
}

#[test]
fn run_finds_the_winning_move_among_alternatives() {
    let config = SearchConfig::default().with_max_iterations(500);
    let mut tree = SearchTree::new(near_win_board(), Mark::X, config);

    let action = tree.run().unwrap();

    assert_eq!(action, Move(2));
    assert_eq!(tree.best_child().unwrap().win_rate(), 1.0);
    assert!(tree.statistics().tree_size > 6);
}

#[test]
fn run_honors_the_time_budget() {
    let config = SearchConfig::default()
        .with_max_iterations(usize::MAX)
        .with_max_time(Duration::from_millis(50));
    let mut tree = SearchTree::new(TicTacToe::new(), Mark::X, config);

    let result = tree.run();

    assert!(result.is_ok());
    let stats = tree.statistics();
    assert!(stats.stopped_early);
    assert!(stats.total_time >= Duration::from_millis(50));
    assert!(stats.iterations > 0);
}

#[test]
fn run_for_overrides_the_budget_once() {
    let config = SearchConfig::default().with_max_iterations(usize::MAX);
    let mut tree = SearchTree::new(TicTacToe::new(), Mark::X, config);

    let result = tree.run_for(Duration::from_millis(20));

    assert!(result.is_ok());
    assert!(tree.statistics().stopped_early);
}

#[test]
fn run_on_a_finished_game_reports_no_legal_actions() {
    let config = SearchConfig::default().with_max_iterations(10);
    let mut tree = SearchTree::new(won_board(), Mark::X, config);

    match tree.run() {
        Err(SearchError::NoLegalActions) => {}
        other => panic!("expected NoLegalActions, got {:?}", other.map(|a| a.0)),
    }
}

#[test]
fn advance_reroots_without_resetting_statistics() {
    let config = SearchConfig::default().with_max_iterations(300);
    let mut tree = SearchTree::new(near_win_board(), Mark::X, config);

    let action = tree.run().unwrap();
    let carried_visits = tree.best_child().unwrap().visits;
    assert!(carried_visits > 0);

    tree.advance(&action).unwrap();

    assert_eq!(tree.root().visits, carried_visits);
    assert_eq!(tree.root().incoming_action, Some(action));
    assert!(tree.win_rate() > 0.0);
}

#[test]
fn advance_rejects_a_desynchronized_action() {
    let config = SearchConfig::default().with_max_iterations(10);
    let mut tree = SearchTree::new(near_win_board(), Mark::X, config);

    // Cell 0 was played long before this position.
    match tree.advance(&Move(0)) {
        Err(SearchError::UnknownAction(message)) => {
            assert!(message.contains("Move(0)"));
        }
        other => panic!("expected UnknownAction, got {:?}", other),
    }
}

#[test]
fn advance_works_on_a_fresh_tree() {
    let config = SearchConfig::default();
    let mut tree = SearchTree::new(TicTacToe::new(), Mark::X, config);

    // No search has run: advancing expands the root on demand.
    tree.advance(&Move(4)).unwrap();
    assert_eq!(tree.root().state.board[4], Some(Mark::X));
}

#[test]
fn tree_survives_a_full_turn_cycle() {
    let config = SearchConfig::default().with_max_iterations(200);
    let mut tree = SearchTree::new(TicTacToe::new(), Mark::X, config);

    // Engine turn, then an opponent reply, then another engine turn.
    let first = tree.run().unwrap();
    tree.advance(&first).unwrap();

    let reply = tree
        .root()
        .state
        .legal_actions()
        .into_iter()
        .next()
        .unwrap();
    tree.advance(&reply).unwrap();

    let second = tree.run().unwrap();
    assert_ne!(second, first);
    assert_ne!(second, reply);
}

#[test]
fn render_tree_shows_the_current_root() {
    let config = SearchConfig::default().with_max_iterations(20);
    let mut tree = SearchTree::new(one_move_from_win(), Mark::X, config);
    tree.run().unwrap();

    let rendered = tree.render_tree();
    assert!(rendered.starts_with("Root"));
    assert!(rendered.contains("Move(8)"));
}
