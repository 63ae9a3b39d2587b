#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the search interval is not a valid bracket.
    #[error("invalid interval: left endpoint ({low}) must be less than right endpoint ({high})")]
    InvalidInterval {
        /// The left endpoint supplied by the caller.
        low: f64,
        /// The right endpoint supplied by the caller.
        high: f64,
    },

    /// Returned when the objective function fails during evaluation.
    ///
    /// The engine performs no retry and no recovery; the failure surfaces
    /// directly to the caller with the objective's own message.
    #[error("objective evaluation failed: {0}")]
    Evaluation(String),

    /// Returned when the expression lexer meets a character outside the
    /// expression language.
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset into the expression string.
        pos: usize,
    },

    /// Returned when the expression parser meets a token it cannot use.
    #[error("unexpected token '{found}' at position {pos}")]
    UnexpectedToken {
        /// A rendering of the offending token.
        found: String,
        /// Byte offset into the expression string.
        pos: usize,
    },

    /// Returned when an expression ends mid-construct.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// Returned when input remains after a complete expression.
    #[error("trailing input at position {pos}")]
    TrailingInput {
        /// Byte offset of the first unconsumed token.
        pos: usize,
    },

    /// Returned when an expression references a name outside the allowlist.
    #[error(
        "unknown name '{0}': allowed names are x, pi, e and the functions \
         sin, cos, exp, log, sqrt (optionally math-qualified)"
    )]
    UnknownName(String),

    /// Returned when an example function name is not in the registry.
    #[error("unknown example '{0}': available examples are quadratic, wavy")]
    UnknownExample(String),
}

pub type Result<T> = core::result::Result<T, Error>;
