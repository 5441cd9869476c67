//! Uniform-random playout: an alternative way to estimate a state's value.
//!
//! The recursive growth step in [`tree`](crate::tree) deepens the tree until
//! some descendant's state is itself decided; it never simulates. This
//! module provides the classical Monte-Carlo evaluation instead: play random
//! legal moves from a state until somebody wins. It is not wired into
//! [`grow`](crate::SearchNode::grow); callers wanting rollout-based
//! estimates invoke it themselves.

use rand::{seq::SliceRandom, Rng};

use crate::game::{GameState, Verdict};
use crate::tree::Outcome;

/// Picks a uniformly random legal action, or `None` when there is none.
pub fn random_action<S: GameState, R: Rng>(state: &S, rng: &mut R) -> Option<S::Action> {
    state.legal_actions().choose(rng).cloned()
}

/// Plays random legal moves from `state` until a verdict for `target`.
///
/// Returns [`Outcome::Unknown`] when the game runs out of legal moves
/// without a decision. Assumes the game terminates under random play; the
/// playout length is bounded only by the game itself.
pub fn random_playout<S: GameState, R: Rng>(
    state: &S,
    target: &S::Player,
    rng: &mut R,
) -> Outcome {
    let mut current = state.clone();
    let mut plies = 0usize;

    loop {
        match current.verdict_for(target) {
            Verdict::Won => {
                log::debug!("playout decided after {} plies", plies);
                return Outcome::Win;
            }
            Verdict::Lost => {
                log::debug!("playout decided after {} plies", plies);
                return Outcome::Loss;
            }
            Verdict::Undecided => {}
        }

        let action = match random_action(&current, rng) {
            Some(action) => action,
            None => return Outcome::Unknown,
        };
        current = current.apply(&action);
        plies += 1;
    }
}
