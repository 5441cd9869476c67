//! UCT score arithmetic shared by selection and the test suite.

/// Tiny positive constant guarding the divisions in the UCT score.
///
/// This is purely a division-by-zero guard, not a tunable exploration
/// parameter.
pub const EPSILON: f64 = f64::EPSILON;

/// Exploitation term: the child's observed win rate.
pub fn exploitation_term(child_wins: f64, child_visits: u64) -> f64 {
    child_wins / (child_visits as f64 + EPSILON)
}

/// Exploration term: the under-visited-child bonus.
///
/// Note the numerator is driven by the parent's accumulated *wins*, not its
/// visit count.
pub fn exploration_term(parent_wins: f64, child_visits: u64) -> f64 {
    (2.0 * (parent_wins + 1.0 + EPSILON).ln() / (child_visits as f64 + EPSILON)).sqrt()
}

/// Full UCT score for one child.
///
/// `offset` is added uniformly to every child, so it shifts magnitudes but
/// can never change the ranking. See
/// [`SearchConfig::with_uct_offset`](crate::SearchConfig::with_uct_offset).
pub fn uct_score(parent_wins: f64, child_wins: f64, child_visits: u64, offset: f64) -> f64 {
    exploitation_term(child_wins, child_visits) + exploration_term(parent_wins, child_visits) + offset
}

/// Win rate with a zero-visit guard.
pub fn win_rate(wins: f64, visits: u64) -> f64 {
    if visits == 0 {
        return 0.0;
    }
    wins / visits as f64
}
