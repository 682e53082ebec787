//! Text rendering of search results.
//!
//! [`Report`] prints one algorithm's outcome; [`Comparison`] lines up
//! several runs of the same instance.

use std::fmt;

use crate::search::{SearchResult, SearchStatus};

/// Formats a single run.
///
/// # Examples
///
/// ```
/// use hanoi_search::hanoi::Hanoi;
/// use hanoi_search::iddfs::{IddfsConfig, IddfsRunner};
/// use hanoi_search::report::Report;
///
/// let result = IddfsRunner::run(&Hanoi::new(1).unwrap(), &IddfsConfig::default());
/// let text = Report::new("IDDFS", &result).to_string();
/// assert!(text.contains("Moves: 1"));
/// assert!(text.contains("1. Origin -> Destination"));
/// ```
pub struct Report<'a, M> {
    algorithm: &'a str,
    result: &'a SearchResult<M>,
    show_path: bool,
}

impl<'a, M> Report<'a, M> {
    pub fn new(algorithm: &'a str, result: &'a SearchResult<M>) -> Self {
        Self {
            algorithm,
            result,
            show_path: true,
        }
    }

    /// Whether to list every move of the solution.
    pub fn with_path(mut self, show: bool) -> Self {
        self.show_path = show;
        self
    }
}

fn status_line(status: SearchStatus) -> &'static str {
    match status {
        SearchStatus::Solved => "solution found",
        SearchStatus::NoSolution => "no solution found",
        SearchStatus::LimitReached => "no solution found (search limit reached)",
    }
}

impl<M: fmt::Display> fmt::Display for Report<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Result: {}", status_line(r.status))?;
        if let Some(count) = r.move_count {
            writeln!(f, "Moves: {count}")?;
        }
        writeln!(f, "Nodes expanded: {}", r.nodes_expanded)?;
        if let Some(depth) = r.depth_reached {
            writeln!(f, "Deepest bound: {depth}")?;
        }
        write!(f, "Elapsed: {:.4} seconds", r.elapsed_secs())?;

        if let (true, Some(path)) = (self.show_path, &r.path) {
            if path.is_empty() {
                write!(f, "\nAlready at the goal.")?;
            } else {
                write!(f, "\nPath:")?;
                for (i, mv) in path.iter().enumerate() {
                    write!(f, "\n  {}. {mv}", i + 1)?;
                }
            }
        }
        Ok(())
    }
}

/// Side-by-side summary of several runs.
pub struct Comparison<'a, M> {
    rows: Vec<(&'a str, &'a SearchResult<M>)>,
}

impl<'a, M> Comparison<'a, M> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn with_run(mut self, algorithm: &'a str, result: &'a SearchResult<M>) -> Self {
        self.rows.push((algorithm, result));
        self
    }

    /// Whether every solved run found the same number of moves.
    pub fn move_counts_agree(&self) -> bool {
        let mut counts = self.rows.iter().filter_map(|(_, r)| r.move_count);
        match counts.next() {
            Some(first) => counts.all(|c| c == first),
            None => true,
        }
    }
}

impl<M> Default for Comparison<'_, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Display for Comparison<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:>10} {:>16} {:>12}",
            "Algorithm", "Moves", "Nodes expanded", "Seconds"
        )?;
        for (name, r) in &self.rows {
            let moves = r
                .move_count
                .map_or_else(|| "-".to_string(), |c| c.to_string());
            writeln!(
                f,
                "{:<10} {:>10} {:>16} {:>12.4}",
                name,
                moves,
                r.nodes_expanded,
                r.elapsed_secs()
            )?;
        }
        if self.move_counts_agree() {
            write!(f, "Move counts agree.")
        } else {
            write!(f, "Move counts differ.")
        }
    }
}
