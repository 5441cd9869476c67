//! # uct-search
//!
//! A decision engine for two-player, perfect-information, turn-based games,
//! built around a UCT-guided search tree that is reused across turns.
//!
//! The engine grows a tree of game-state snapshots one step at a time: each
//! growth step descends a UCT-chosen path, deepening the tree until some
//! descendant's state is itself a decided win or loss, then backpropagates
//! that single outcome along the descended path. There is no randomized
//! playout inside the growth step; the classical random rollout is
//! available separately in the [`rollout`] module as an alternative
//! evaluation strategy.
//!
//! The game rules stay outside the crate: implement [`GameState`] for your
//! game (legal moves, pure move application, per-side verdict) and the
//! engine does the rest.
//!
//! ## Basic usage
//!
//! ```
//! use uct_search::{GameState, SearchConfig, SearchTree, Verdict};
//!
//! // A trivial last-move-wins game: one token left, taking it wins.
//! #[derive(Clone)]
//! struct Countdown {
//!     remaining: usize,
//!     to_move: usize,
//! }
//!
//! impl GameState for Countdown {
//!     type Action = usize;
//!     type Player = usize;
//!
//!     fn legal_actions(&self) -> Vec<usize> {
//!         if self.remaining == 0 {
//!             return vec![];
//!         }
//!         vec![1]
//!     }
//!
//!     fn apply(&self, take: &usize) -> Self {
//!         Countdown {
//!             remaining: self.remaining - take,
//!             to_move: 1 - self.to_move,
//!         }
//!     }
//!
//!     fn verdict_for(&self, side: &usize) -> Verdict {
//!         if self.remaining > 0 {
//!             return Verdict::Undecided;
//!         }
//!         // The player who took the last token has already moved.
//!         if 1 - self.to_move == *side {
//!             Verdict::Won
//!         } else {
//!             Verdict::Lost
//!         }
//!     }
//!
//!     fn side_to_move(&self) -> usize {
//!         self.to_move
//!     }
//! }
//!
//! fn main() -> Result<(), uct_search::SearchError> {
//!     let start = Countdown { remaining: 1, to_move: 0 };
//!     let config = SearchConfig::default().with_max_iterations(100);
//!
//!     // Search for side 0, one move away from winning.
//!     let mut tree = SearchTree::new(start, 0, config);
//!     let action = tree.run()?;
//!     assert_eq!(action, 1);
//!
//!     // Apply the move in the real game and re-root the tree on it.
//!     tree.advance(&action)?;
//!     assert!(tree.win_rate() > 0.0);
//!     Ok(())
//! }
//! ```
//!
//! ## How a growth step works
//!
//! 1. **Expansion**: a childless, non-terminal node gets one child per legal
//!    action, each owning a fresh state snapshot.
//! 2. **Selection**: one child is chosen by UCT score, ties broken uniformly
//!    at random.
//! 3. **Evaluation**: if the chosen child's state is decided, that verdict
//!    is the outcome; otherwise the step recurses into the child.
//! 4. **Backpropagation**: the outcome is recorded on the chosen child at
//!    every level on the way back up the call stack.
//!
//! Across real turns, [`SearchTree::advance`] re-roots the tree at the child
//! matching the move actually played, so the statistics gathered for that
//! subtree are not thrown away.

pub mod config;
pub mod game;
pub mod rollout;
pub mod search;
pub mod stats;
pub mod tree;
pub mod utils;

pub use config::SearchConfig;
pub use game::{GameAction, GameState, Player, Verdict};
pub use search::SearchTree;
pub use stats::SearchStatistics;
pub use tree::{Outcome, SearchNode};

/// Error types for the search engine
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// The root state has no legal actions to search over.
    #[error("no legal actions available from the current state")]
    NoLegalActions,

    /// Best-move extraction ran before any child had been visited.
    #[error("no child has been visited yet; run the search first")]
    NoVisitedChild,

    /// `advance` was given an action matching no legal move at the root.
    #[error("action {0} does not match any legal move at the search root")]
    UnknownAction(String),
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
