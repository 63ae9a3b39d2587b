//! Core types for the search engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The direction of optimization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Search for a minimum of the objective function.
    Minimize,
    /// Search for a maximum of the objective function.
    Maximize,
}

impl Direction {
    /// Whether `candidate` is strictly better than `incumbent` for this
    /// direction.
    ///
    /// An exact tie is not an improvement, so ties always fall to the
    /// incumbent; the search loop relies on this to pick its "shrink from
    /// the left" branch when the two interior values compare equal. A NaN
    /// candidate is never an improvement either (IEEE-754 comparisons are
    /// false for NaN), which keeps the loop terminating even when the
    /// objective produces NaN somewhere in the bracket.
    ///
    /// # Examples
    ///
    /// ```
    /// use unimodal::Direction;
    ///
    /// assert!(Direction::Minimize.is_better(1.0, 2.0));
    /// assert!(Direction::Maximize.is_better(2.0, 1.0));
    /// assert!(!Direction::Minimize.is_better(1.0, 1.0));
    /// ```
    #[must_use]
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Direction::Minimize => candidate < incumbent,
            Direction::Maximize => candidate > incumbent,
        }
    }
}

/// The outcome of a completed search.
///
/// `iterations` is the number of bracket-narrowing steps actually executed.
/// It is at most the configured iteration cap; a value equal to the cap
/// signals that the tolerance was not reached before the cap.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    /// The located optimum.
    pub x: f64,
    /// The objective value at [`x`](SearchResult::x).
    pub value: f64,
    /// Number of narrowing iterations performed.
    pub iterations: usize,
}
