//! Tuning knobs for the decision tree search.

/// Configuration for [search](crate::ai::minimax::search) and [MinimaxAgent](crate::ai::minimax::MinimaxAgent).
///
/// The defaults give the reference behaviour: deepen until the tree holds 400 nodes or is 10 plies deep,
/// trim from depth 4 on to the 3 best branches within 0.1 of the best score,
/// and play the second best move 10% of the time.
///
/// ```
/// use reversi_ai::ai::config::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_node_budget(1000)
///     .with_second_best_probability(0.0);
/// assert_eq!(config.max_depth, 10);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SearchConfig {
    /// Keep deepening while the tree has fewer nodes than this.
    pub node_budget: usize,
    /// Never deepen beyond this many plies.
    pub max_depth: u32,
    /// Trim after expanding to depths strictly greater than this.
    pub trim_after_depth: u32,
    /// Children further than this from the best child score get trimmed.
    pub trim_window: f32,
    /// At most this many children survive trimming.
    pub trim_width: usize,
    /// Chance of picking the second best move instead of the best one.
    pub second_best_probability: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            node_budget: 400,
            max_depth: 10,
            trim_after_depth: 3,
            trim_window: 0.1,
            trim_width: 3,
            second_best_probability: 0.1,
        }
    }
}

impl SearchConfig {
    pub fn with_node_budget(mut self, node_budget: usize) -> Self {
        self.node_budget = node_budget;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_trim_after_depth(mut self, trim_after_depth: u32) -> Self {
        self.trim_after_depth = trim_after_depth;
        self
    }

    pub fn with_trim_window(mut self, trim_window: f32) -> Self {
        self.trim_window = trim_window;
        self
    }

    pub fn with_trim_width(mut self, trim_width: usize) -> Self {
        self.trim_width = trim_width;
        self
    }

    pub fn with_second_best_probability(mut self, probability: f64) -> Self {
        self.second_best_probability = probability;
        self
    }

    /// Panics if this configuration can't produce a move.
    pub fn assert_valid(&self) {
        assert!(self.max_depth > 0, "requires max_depth>0 to find the best move");
        assert!(self.trim_width > 0, "trimming must keep at least one child");
        assert!(
            (0.0..=1.0).contains(&self.second_best_probability),
            "second best probability {} is not a probability",
            self.second_best_probability
        );
    }
}
