//! A* configuration.

/// Configuration parameters for A*.
///
/// # Examples
///
/// ```
/// use hanoi_search::astar::AStarConfig;
///
/// let config = AStarConfig::default().with_max_expansions(10_000);
/// assert_eq!(config.max_expansions, Some(10_000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AStarConfig {
    /// Maximum number of frontier entries to expand before giving up.
    /// `None` runs until the goal is reached or the frontier is empty.
    pub max_expansions: Option<usize>,
}

impl AStarConfig {
    /// Sets the expansion budget.
    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }
}
