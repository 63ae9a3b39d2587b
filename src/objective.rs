//! The [`Objective`] trait defines what gets optimized.
//!
//! For plain functions of `x` there is nothing to implement: pass a closure
//! straight to [`GoldenSection::minimize`](crate::GoldenSection::minimize) or
//! [`GoldenSection::maximize`](crate::GoldenSection::maximize).
//!
//! Implement [`Objective`] when evaluation can fail — a domain check, a
//! lookup, a measurement that may be unavailable — and pass it to
//! [`GoldenSection::search_with`](crate::GoldenSection::search_with). The
//! error propagates out of the search untouched (stringified into
//! [`Error::Evaluation`](crate::Error::Evaluation)); the engine never
//! retries.
//!
//! ```
//! use unimodal::{Direction, GoldenSection, Objective};
//!
//! struct CheckedLog;
//!
//! impl Objective for CheckedLog {
//!     type Error = String;
//!
//!     fn evaluate(&mut self, x: f64) -> Result<f64, String> {
//!         if x <= 0.0 {
//!             return Err(format!("log undefined at {x}"));
//!         }
//!         Ok(x.ln() + (x - 1.5).powi(2))
//!     }
//! }
//!
//! let result = GoldenSection::new()
//!     .tol(1e-8)
//!     .search_with(CheckedLog, 0.5, 3.0, Direction::Minimize)
//!     .unwrap();
//! assert!((result.x - 1.0).abs() < 1e-6);
//! ```

/// A scalar objective function, evaluated one point at a time.
///
/// This is a capability, not a hierarchy: anything that can turn an `x` into
/// a value (or an error) qualifies. Closures of the shape
/// `FnMut(f64) -> Result<f64, E>` implement it via the blanket impl, so
/// `|x| Ok::<_, Error>(…)` can be passed directly to
/// [`GoldenSection::search_with`](crate::GoldenSection::search_with).
pub trait Objective {
    /// The error type returned by [`evaluate`](Objective::evaluate).
    type Error: ToString + 'static;

    /// Evaluate the objective at `x`.
    ///
    /// The search engine assumes evaluation is side-effect-free as far as
    /// the objective value is concerned; `&mut self` exists so that
    /// objectives may keep counters or caches.
    ///
    /// # Errors
    ///
    /// Any error whose type implements `ToString`. A failure aborts the
    /// search immediately.
    fn evaluate(&mut self, x: f64) -> Result<f64, Self::Error>;
}

impl<F, E> Objective for F
where
    F: FnMut(f64) -> Result<f64, E>,
    E: ToString + 'static,
{
    type Error = E;

    fn evaluate(&mut self, x: f64) -> Result<f64, E> {
        self(x)
    }
}
