//! The driver-facing search interface.
//!
//! [`SearchTree`] owns the root node and drives repeated growth steps inside
//! an iteration and wall-clock budget, then reads off the best child as the
//! chosen move. After the real game applies a move (the engine's own or the
//! opponent's), [`advance`](SearchTree::advance) re-roots the tree at the
//! matching child so the accumulated statistics survive across turns.

use std::time::Instant;

use log::debug;

use crate::config::SearchConfig;
use crate::game::GameState;
use crate::stats::SearchStatistics;
use crate::tree::{Outcome, SearchNode};
use crate::{Result, SearchError};

/// A search tree bound to the side it chooses moves for.
pub struct SearchTree<S: GameState> {
    root: SearchNode<S>,
    target: S::Player,
    config: SearchConfig,
    statistics: SearchStatistics,
}

impl<S: GameState> SearchTree<S> {
    /// Creates a tree rooted at `initial_state`, evaluating outcomes for
    /// `target`.
    pub fn new(initial_state: S, target: S::Player, config: SearchConfig) -> Self {
        SearchTree {
            root: SearchNode::new_root(initial_state),
            target,
            config,
            statistics: SearchStatistics::new(),
        }
    }

    /// Performs a single growth step from the root.
    pub fn grow_once(&mut self) -> Outcome {
        self.root
            .grow(&self.target, self.config.uct_offset, &mut rand::thread_rng())
    }

    /// Grows the tree within the configured budget, then returns the best
    /// action found.
    ///
    /// The iteration budget is always honored; the optional time budget is
    /// checked between steps, so an in-flight step runs to completion.
    /// Errors with [`SearchError::NoLegalActions`] when the root state has
    /// no moves and with [`SearchError::NoVisitedChild`] when the budget
    /// produced no visited child to choose from.
    pub fn run(&mut self) -> Result<S::Action> {
        self.statistics = SearchStatistics::new();
        self.root.expand();
        if self.root.children.is_empty() {
            return Err(SearchError::NoLegalActions);
        }

        let start = Instant::now();

        for i in 0..self.config.max_iterations {
            if let Some(budget) = self.config.max_time {
                if start.elapsed() >= budget {
                    self.statistics.stopped_early = true;
                    debug!("time budget exhausted after {} growth steps", i);
                    break;
                }
            }

            self.grow_once();
            self.statistics.iterations = i + 1;
        }

        self.statistics.total_time = start.elapsed();
        self.statistics.tree_size = self.root.subtree_size();
        self.statistics.max_depth = self.root.height();
        debug!(
            "run finished: {} iterations, {} nodes",
            self.statistics.iterations, self.statistics.tree_size
        );

        let best = self.root.best_child().ok_or(SearchError::NoVisitedChild)?;
        // Children always carry the action that produced them.
        best.incoming_action
            .clone()
            .ok_or(SearchError::NoVisitedChild)
    }

    /// Convenience wrapper: runs with the given wall-clock budget, leaving
    /// the configured iteration budget in place.
    pub fn run_for(&mut self, duration: std::time::Duration) -> Result<S::Action> {
        let saved = self.config.max_time;
        self.config.max_time = Some(duration);
        let result = self.run();
        self.config.max_time = saved;
        result
    }

    /// Re-roots the tree at the child reached by `action`.
    ///
    /// The chosen child becomes the new root, carrying its accumulated
    /// statistics and subtree forward; all siblings are discarded. Errors
    /// with [`SearchError::UnknownAction`] when the action matches no legal
    /// move computed at expansion time, which usually means the real game
    /// and the tree have desynchronized.
    pub fn advance(&mut self, action: &S::Action) -> Result<()> {
        let child = self
            .root
            .take_child(action)
            .ok_or_else(|| SearchError::UnknownAction(format!("{:?}", action)))?;
        debug!(
            "re-rooted at {:?} ({} visits carried over)",
            action, child.visits
        );
        self.root = child;
        Ok(())
    }

    /// The current root node.
    pub fn root(&self) -> &SearchNode<S> {
        &self.root
    }

    /// The best child of the current root, if any child has been visited.
    pub fn best_child(&self) -> Option<&SearchNode<S>> {
        self.root.best_child()
    }

    /// Win rate of the current root, 0 when it has never been updated.
    ///
    /// Note the root's own counters are only populated while it was still a
    /// child of an earlier root; a freshly created tree reports 0.
    pub fn win_rate(&self) -> f64 {
        self.root.win_rate()
    }

    /// Statistics from the most recent [`run`](SearchTree::run).
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Renders the whole tree as an indented text dump.
    pub fn render_tree(&self) -> String {
        self.root.render()
    }
}
