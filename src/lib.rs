#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]

//! One-dimensional unimodal optimization via golden-section search.
//!
//! Given a continuous scalar function and a bracketing interval `[a, b]`,
//! the engine iteratively narrows the interval at the golden ratio until its
//! length drops below a tolerance, locating a minimum or maximum with one
//! function evaluation per iteration. A small CLI and a sandboxed
//! math-expression parser ride along for running searches from the command
//! line.
//!
//! # Getting Started
//!
//! ```
//! use unimodal::prelude::*;
//!
//! let result = GoldenSection::new()
//!     .tol(1e-6)
//!     .minimize(|x| (x - 2.0).powi(2) + 1.0, -5.0, 5.0)
//!     .unwrap();
//!
//! assert!((result.x - 2.0).abs() < 1e-6);
//! assert!((result.value - 1.0).abs() < 1e-9);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`GoldenSection`] | The search engine: tolerance, iteration cap, and the narrowing loop. |
//! | [`Direction`] | Whether the search looks for a minimum or a maximum. |
//! | [`SearchResult`] | The located optimum, its value, and the iteration count. |
//! | [`Objective`] | A fallible scalar function; plain closures work via the blanket impl. |
//! | [`Expr`] | A parsed, allowlist-sandboxed math expression in `x`. |
//! | [`Example`](functions::Example) | Registry of built-in example functions. |
//!
//! # Caveats
//!
//! The function is assumed unimodal on `[a, b]`. With multiple local
//! extrema the search still terminates but converges to an arbitrary one of
//! them. NaN or infinite objective values are passed through IEEE-754
//! comparisons rather than detected.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on [`Direction`] and [`SearchResult`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) around the search loop | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod error;
pub mod expr;
pub mod functions;
mod objective;
mod search;
mod types;

pub use error::{Error, Result};
pub use expr::Expr;
pub use functions::Example;
pub use objective::Objective;
pub use search::GoldenSection;
pub use types::{Direction, SearchResult};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use unimodal::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::expr::Expr;
    pub use crate::functions::Example;
    pub use crate::objective::Objective;
    pub use crate::search::GoldenSection;
    pub use crate::types::{Direction, SearchResult};
}
