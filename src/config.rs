//! Configuration options for the search driver.

use std::time::Duration;

/// Configuration for a [`SearchTree`](crate::SearchTree) run.
///
/// Use the builder methods to customize a configuration:
///
/// ```
/// use std::time::Duration;
/// use uct_search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_iterations(50_000)
///     .with_max_time(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of growth steps per run.
    ///
    /// The run stops after this many steps even if time remains.
    pub max_iterations: usize,

    /// Optional wall-clock budget per run.
    ///
    /// Checked between growth steps; an in-flight step always runs to
    /// completion, so the budget can be overshot by at most one step.
    pub max_time: Option<Duration>,

    /// Constant additive term in the UCT score.
    ///
    /// Applied identically to every child, so it shifts score magnitudes
    /// without ever changing the ranking. Kept so scores reproduce the
    /// reference numbers exactly; set it to 0.0 if raw UCT values are
    /// preferred.
    pub uct_offset: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_iterations: 10_000,
            max_time: None,
            uct_offset: 2.0,
        }
    }
}

impl SearchConfig {
    /// Sets the maximum number of growth steps per run.
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets the wall-clock budget per run.
    pub fn with_max_time(mut self, duration: Duration) -> Self {
        self.max_time = Some(duration);
        self
    }

    /// Sets the constant additive term in the UCT score.
    pub fn with_uct_offset(mut self, offset: f64) -> Self {
        self.uct_offset = offset;
        self
    }
}
