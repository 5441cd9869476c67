//! Statistics collected while running the search driver.

use std::time::Duration;

/// Statistics describing the most recent [`run`](crate::SearchTree::run).
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of growth steps performed.
    pub iterations: usize,

    /// Total wall-clock time spent.
    pub total_time: Duration,

    /// Total number of nodes in the tree after the run.
    pub tree_size: usize,

    /// Height of the tree after the run.
    pub max_depth: usize,

    /// Whether the run stopped on the time budget before exhausting its
    /// iteration budget.
    pub stopped_early: bool,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object.
    pub fn new() -> Self {
        SearchStatistics {
            iterations: 0,
            total_time: Duration::from_secs(0),
            tree_size: 1,
            max_depth: 0,
            stopped_early: false,
        }
    }

    /// Average time per growth step in microseconds.
    pub fn avg_time_per_iteration_us(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.total_time.as_micros() as f64 / self.iterations as f64
    }

    /// Growth steps per second.
    pub fn iterations_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.iterations as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Search statistics:\n\
             - Iterations: {}\n\
             - Total time: {:.3} seconds\n\
             - Tree size: {} nodes\n\
             - Max depth: {}\n\
             - Avg time per iteration: {:.3} µs\n\
             - Iterations per second: {:.1}\n\
             - Stopped early: {}",
            self.iterations,
            self.total_time.as_secs_f64(),
            self.tree_size,
            self.max_depth,
            self.avg_time_per_iteration_us(),
            self.iterations_per_second(),
            self.stopped_early
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
