//! Golden-section search over a bracketing interval.
//!
//! The interval `[a, b]` is split at the inverse golden ratio into two
//! interior points `c < d`. Each iteration discards the endpoint on the
//! worse side and, because the golden split is self-similar under interval
//! contraction, one of the two interior points (and its cached objective
//! value) carries over — only one new evaluation is needed per step:
//!
//! ```text
//!         a         c    d         b
//! iter 1  +---------+----+---------+
//!         a    c    d    b
//! iter 2  +----+----+----+            (fc < fd: minimum was in [a, d])
//! ```
//!
//! The bracket shrinks by a constant factor of ~0.618 per iteration until
//! its length drops to the tolerance or the iteration cap is reached.

use core::convert::Infallible;

use crate::error::{Error, Result};
use crate::objective::Objective;
use crate::types::{Direction, SearchResult};

/// Inverse golden ratio, (sqrt(5) - 1) / 2.
const INV_PHI: f64 = 0.618_033_988_749_894_8;

/// Golden-section search engine for unimodal functions on `[a, b]`.
///
/// Behavior is undefined (though still terminating) when the function has
/// multiple local extrema inside the bracket: the search converges to one
/// of them with no guarantee of global optimality.
///
/// # Defaults
///
/// - Tolerance: `1e-5` (final bracket length)
/// - Iteration cap: `1000`
///
/// # Examples
///
/// ```
/// use unimodal::GoldenSection;
///
/// let result = GoldenSection::new()
///     .tol(1e-6)
///     .minimize(|x| (x - 2.0).powi(2) + 1.0, -5.0, 5.0)
///     .unwrap();
///
/// assert!((result.x - 2.0).abs() < 1e-6);
/// assert!((result.value - 1.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GoldenSection {
    tol: f64,
    max_iter: usize,
}

impl Default for GoldenSection {
    fn default() -> Self {
        Self {
            tol: 1e-5,
            max_iter: 1000,
        }
    }
}

impl GoldenSection {
    /// Create an engine with the default tolerance and iteration cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interval-length stopping threshold.
    #[must_use]
    pub fn tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set the iteration cap guarding against non-convergence.
    ///
    /// With `max_iter = 0` the search returns immediately, choosing the
    /// better of the two initial interior points.
    #[must_use]
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Search for a minimum of `f` on `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if `a >= b`.
    pub fn minimize<F>(&self, f: F, a: f64, b: f64) -> Result<SearchResult>
    where
        F: FnMut(f64) -> f64,
    {
        self.search(f, a, b, Direction::Minimize)
    }

    /// Search for a maximum of `f` on `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if `a >= b`.
    pub fn maximize<F>(&self, f: F, a: f64, b: f64) -> Result<SearchResult>
    where
        F: FnMut(f64) -> f64,
    {
        self.search(f, a, b, Direction::Maximize)
    }

    /// Search in the given direction with an infallible function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if `a >= b`.
    pub fn search<F>(&self, mut f: F, a: f64, b: f64, direction: Direction) -> Result<SearchResult>
    where
        F: FnMut(f64) -> f64,
    {
        self.search_with(move |x| Ok::<_, Infallible>(f(x)), a, b, direction)
    }

    /// Search in the given direction with a fallible [`Objective`].
    ///
    /// Runs the narrowing loop while the bracket is longer than the
    /// tolerance and the iteration cap has not been reached, then returns
    /// the better of the two final interior points. Exactly one objective
    /// evaluation happens per iteration after the two initial ones.
    ///
    /// NaN or infinite objective values are not treated specially: they
    /// flow through IEEE-754 comparisons, giving deterministic but
    /// unspecified branch selection (see [`Direction::is_better`]).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInterval`] if `a >= b`, raised before any
    ///   evaluation.
    /// - [`Error::Evaluation`] carrying the objective's own message if any
    ///   evaluation fails; the search stops at the first failure.
    pub fn search_with<O>(
        &self,
        mut objective: O,
        a: f64,
        b: f64,
        direction: Direction,
    ) -> Result<SearchResult>
    where
        O: Objective,
    {
        if a >= b {
            return Err(Error::InvalidInterval { low: a, high: b });
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "golden_section",
            a,
            b,
            tol = self.tol,
            max_iter = self.max_iter,
            direction = ?direction,
        )
        .entered();

        let mut eval = |x: f64| {
            objective
                .evaluate(x)
                .map_err(|e| Error::Evaluation(e.to_string()))
        };

        let (mut a, mut b) = (a, b);
        let mut c = b - INV_PHI * (b - a);
        let mut d = a + INV_PHI * (b - a);
        let mut fc = eval(c)?;
        let mut fd = eval(d)?;
        let mut iterations = 0;

        while (b - a) > self.tol && iterations < self.max_iter {
            if direction.is_better(fc, fd) {
                // The extremum lies in [a, d]; c becomes the new d.
                b = d;
                d = c;
                fd = fc;
                c = b - INV_PHI * (b - a);
                fc = eval(c)?;
            } else {
                // The extremum lies in [c, b]; d becomes the new c.
                a = c;
                c = d;
                fc = fd;
                d = a + INV_PHI * (b - a);
                fd = eval(d)?;
            }
            iterations += 1;
            trace_debug!(iterations, a, b, "bracket narrowed");
        }

        let (x, value) = if direction.is_better(fc, fd) {
            (c, fc)
        } else {
            (d, fd)
        };
        trace_info!(
            x,
            value,
            iterations,
            converged = iterations < self.max_iter,
            "search finished"
        );

        Ok(SearchResult {
            x,
            value,
            iterations,
        })
    }
}
