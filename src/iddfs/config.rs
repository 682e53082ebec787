//! IDDFS configuration.

/// Configuration parameters for IDDFS.
///
/// # Examples
///
/// ```
/// use hanoi_search::iddfs::IddfsConfig;
///
/// let config = IddfsConfig::default().with_max_depth(20);
/// assert_eq!(config.max_depth, Some(20));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IddfsConfig {
    /// Deepest bound to try. `None` defers to
    /// [`SearchProblem::depth_bound`](crate::search::SearchProblem::depth_bound),
    /// and deepens until the space is exhausted when that is `None` too.
    pub max_depth: Option<usize>,
}

impl IddfsConfig {
    /// Sets the deepest bound to try.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
