//! Built-in example functions for quick experiments.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// `(x - 2)^2 + 1` — a convex parabola with its minimum at `x = 2`,
/// value `1`.
#[must_use]
pub fn quadratic(x: f64) -> f64 {
    (x - 2.0).powi(2) + 1.0
}

/// `(x - 0.5)^2 + sin(3x)` — a parabola with a superimposed wave. Unimodal
/// only on sufficiently small intervals.
#[must_use]
pub fn wavy(x: f64) -> f64 {
    (x - 0.5).powi(2) + (3.0 * x).sin()
}

/// The registry of built-in example functions, addressable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Example {
    /// [`quadratic`]
    Quadratic,
    /// [`wavy`]
    Wavy,
}

impl Example {
    /// All registered examples, for help text and enumeration.
    pub const ALL: [Example; 2] = [Example::Quadratic, Example::Wavy];

    /// The name under which the example is registered.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Example::Quadratic => "quadratic",
            Example::Wavy => "wavy",
        }
    }

    /// Evaluate the example at `x`.
    #[must_use]
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Example::Quadratic => quadratic(x),
            Example::Wavy => wavy(x),
        }
    }
}

impl FromStr for Example {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "quadratic" => Ok(Example::Quadratic),
            "wavy" => Ok(Example::Wavy),
            other => Err(Error::UnknownExample(other.to_string())),
        }
    }
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_minimum() {
        assert_eq!(quadratic(2.0), 1.0);
        assert!(quadratic(1.9) > 1.0);
        assert!(quadratic(2.1) > 1.0);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!("quadratic".parse::<Example>().unwrap(), Example::Quadratic);
        assert_eq!("wavy".parse::<Example>().unwrap(), Example::Wavy);
        assert!(matches!(
            "cubic".parse::<Example>().unwrap_err(),
            Error::UnknownExample(name) if name == "cubic"
        ));
    }

    #[test]
    fn names_round_trip() {
        for example in Example::ALL {
            assert_eq!(example.name().parse::<Example>().unwrap(), example);
        }
    }
}
