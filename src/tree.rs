//! The search tree: node representation and the recursive growth algorithm.
//!
//! Each [`SearchNode`] exclusively owns a snapshot of the game state and the
//! subtree below it. Backpropagation happens purely through the call stack:
//! every level of [`grow`](SearchNode::grow) updates the child it just
//! descended into on the way back up, so the tree needs no parent pointers
//! and stays a strict single-owner hierarchy.

use log::trace;
use rand::{seq::SliceRandom, Rng};

use crate::game::{GameState, Verdict};
use crate::utils;

/// Result of one growth step, evaluated for the target side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A descendant's state was a decided win for the target side.
    Win,
    /// A descendant's state was a decided loss for the target side.
    Loss,
    /// The descent bottomed out without a decision.
    Unknown,
}

impl Outcome {
    /// Returns true for `Win` and `Loss`.
    pub fn is_decided(self) -> bool {
        self != Outcome::Unknown
    }

    /// Win credit recorded during backpropagation.
    ///
    /// `Unknown` earns full credit: an unresolved descent is deliberately
    /// scored as a win, biasing ancestors optimistically. This is a
    /// preserved policy choice, not an omission.
    pub fn credit(self) -> f64 {
        match self {
            Outcome::Win | Outcome::Unknown => 1.0,
            Outcome::Loss => 0.0,
        }
    }
}

impl From<Verdict> for Outcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Won => Outcome::Win,
            Verdict::Lost => Outcome::Loss,
            Verdict::Undecided => Outcome::Unknown,
        }
    }
}

/// A node in the search tree.
///
/// The node owns a self-contained state snapshot, created once at
/// construction and never mutated, plus the statistics the UCT score is
/// computed from. Children are populated at most once, by
/// [`expand`](SearchNode::expand).
pub struct SearchNode<S: GameState> {
    /// The game state at this node.
    pub state: S,

    /// The action that produced this node from its parent (`None` for the
    /// root).
    pub incoming_action: Option<S::Action>,

    /// Number of times this node has been updated by a growth step.
    pub visits: u64,

    /// Accumulated win credit. At most `visits`.
    pub wins: f64,

    /// Child nodes, one per legal action; empty until first expansion.
    pub children: Vec<SearchNode<S>>,
}

impl<S: GameState> SearchNode<S> {
    /// Creates a root node wrapping the current real game state.
    pub fn new_root(state: S) -> Self {
        SearchNode {
            state,
            incoming_action: None,
            visits: 0,
            wins: 0.0,
            children: Vec::new(),
        }
    }

    fn new_child(state: S, action: S::Action) -> Self {
        SearchNode {
            state,
            incoming_action: Some(action),
            visits: 0,
            wins: 0.0,
            children: Vec::new(),
        }
    }

    /// Populates `children` with one node per legal action.
    ///
    /// A terminal state is never expanded, and a second call with non-empty
    /// children is a no-op; either way the return value is the number of
    /// children created by *this* call.
    pub fn expand(&mut self) -> usize {
        if !self.children.is_empty() || self.state.is_terminal() {
            return 0;
        }

        let actions = self.state.legal_actions();
        self.children.reserve(actions.len());
        for action in actions {
            let next_state = self.state.apply(&action);
            self.children.push(SearchNode::new_child(next_state, action));
        }

        trace!("expanded {} children", self.children.len());
        self.children.len()
    }

    /// UCT selection: returns the index of the chosen child, or `None` when
    /// this node has no children.
    ///
    /// Children whose score exactly equals the running maximum accumulate
    /// into a candidate set; a strictly greater score resets the set. The
    /// final pick is uniform over the candidates, so ties break randomly
    /// while a unique maximum is returned deterministically.
    pub fn select<R: Rng>(&self, uct_offset: f64, rng: &mut R) -> Option<usize> {
        let mut best_score = -1.0_f64;
        let mut candidates: Vec<usize> = Vec::new();

        for (i, child) in self.children.iter().enumerate() {
            let score = utils::uct_score(self.wins, child.wins, child.visits, uct_offset);
            if score == best_score {
                candidates.push(i);
            }
            if score > best_score {
                best_score = score;
                candidates.clear();
                candidates.push(i);
            }
        }

        candidates.choose(rng).copied()
    }

    /// Performs one unit of tree growth starting from this node.
    ///
    /// Expands this node if it has no children yet, descends one UCT-chosen
    /// child, and either reads off that child's decided verdict or recurses
    /// until some descendant's state is itself decided. The outcome is
    /// recorded on the chosen child on the way back up: statistics
    /// accumulate bottom-up along the descended path, one level at a time,
    /// and the entry node's own counters are never touched by its own
    /// `grow` call.
    ///
    /// When selection yields nothing (a childless terminal leaf), the
    /// outcome is derived from this node's own verdict and returned without
    /// updating anything further.
    pub fn grow<R: Rng>(&mut self, target: &S::Player, uct_offset: f64, rng: &mut R) -> Outcome {
        if self.children.is_empty() {
            self.expand();
        }

        let chosen = match self.select(uct_offset, rng) {
            Some(index) => index,
            // No descent possible: this node's state is terminal (or the
            // game produced no legal moves). Read the verdict off the node
            // itself instead of updating a child that does not exist.
            None => return self.state.verdict_for(target).into(),
        };

        let child = &mut self.children[chosen];
        let outcome = match child.state.verdict_for(target) {
            Verdict::Won => Outcome::Win,
            Verdict::Lost => Outcome::Loss,
            Verdict::Undecided => child.grow(target, uct_offset, rng),
        };
        child.record(outcome);
        outcome
    }

    /// Records one growth outcome on this node.
    pub fn record(&mut self, outcome: Outcome) {
        self.visits += 1;
        self.wins += outcome.credit();
    }

    /// Returns the child with the best observed win rate.
    ///
    /// Only children with at least one visit are candidates. The scan keeps
    /// the first child to reach a new strict maximum, so ties resolve to the
    /// earliest child, a deliberately different policy from selection's
    /// random tie-break.
    pub fn best_child(&self) -> Option<&SearchNode<S>> {
        let mut best_rate = -1.0_f64;
        let mut best = None;

        for child in &self.children {
            if child.visits > 0 && child.win_rate() > best_rate {
                best_rate = child.win_rate();
                best = Some(child);
            }
        }

        best
    }

    /// Detaches and returns the child reached by `action`, expanding first
    /// if needed.
    ///
    /// The returned child keeps its accumulated statistics and subtree; the
    /// remaining siblings are dropped by the caller discarding `self`.
    /// Returns `None` when the action matches no legal move computed at
    /// expansion time.
    pub fn take_child(&mut self, action: &S::Action) -> Option<SearchNode<S>> {
        self.expand();
        let index = self
            .children
            .iter()
            .position(|child| child.incoming_action.as_ref() == Some(action))?;
        Some(self.children.swap_remove(index))
    }

    /// Win rate `wins / visits`, or 0 when never visited.
    pub fn win_rate(&self) -> f64 {
        utils::win_rate(self.wins, self.visits)
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(SearchNode::subtree_size).sum::<usize>()
    }

    /// Height of this subtree in edges (0 for a leaf).
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Renders this subtree as an indented text dump, one node per line.
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.render_node(0, &mut output);
        output
    }

    fn render_node(&self, depth: usize, output: &mut String) {
        use std::fmt::Write;

        let indent = "  ".repeat(depth);
        let action_str = match &self.incoming_action {
            Some(action) => format!("{:?}", action),
            None => "Root".to_string(),
        };
        let _ = writeln!(
            output,
            "{}{} (wins/visits: {:.0}/{}, rate: {:.3})",
            indent,
            action_str,
            self.wins,
            self.visits,
            self.win_rate()
        );

        for child in &self.children {
            child.render_node(depth + 1, output);
        }
    }
}
