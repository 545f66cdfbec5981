//! # Invalid Input
//!
//! Every exercise validates its parameters before computing anything. When a parameter
//! falls outside its domain the exercise returns one of these variants instead of a
//! magic return value.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InputError>;

/// Why an exercise refused its input.
///
/// Values are carried as `f64` so integer and floating point parameters share one type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A floating point parameter was NaN or infinite.
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    /// A parameter that must be zero or greater was negative.
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    /// A parameter fell outside an inclusive range.
    #[error("{name} must be within {min}..={max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter with only a lower bound was under it.
    #[error("{name} must be at least {min}, got {value}")]
    BelowMinimum {
        name: &'static str,
        value: f64,
        min: f64,
    },

    /// An interval whose end comes before its start.
    #[error("range end {end} is before range start {start}")]
    InvertedRange { start: f64, end: f64 },

    /// A final score was requested while the game is still running.
    #[error("the game is not over yet")]
    GameNotOver,
}

impl InputError {
    /// Name of the offending parameter, when the error is about a single one.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::NotFinite { name, .. }
            | Self::Negative { name, .. }
            | Self::OutOfRange { name, .. }
            | Self::BelowMinimum { name, .. } => Some(name),
            Self::InvertedRange { .. } | Self::GameNotOver => None,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_render_integral_values_without_fraction() {
        let err = InputError::OutOfRange {
            name: "year",
            value: -1600.0,
            min: 1.0,
            max: 9999.0,
        };
        assert_eq!(err.to_string(), "year must be within 1..=9999, got -1600");

        let err = InputError::Negative {
            name: "radius",
            value: -2.5,
        };
        assert_eq!(err.to_string(), "radius must not be negative, got -2.5");

        let err = InputError::NotFinite {
            name: "inches",
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "inches must be a finite number, got inf");
        assert_eq!(err.parameter(), Some("inches"));
    }

    #[test]
    fn test_parameter_name() {
        let err = InputError::BelowMinimum {
            name: "first",
            value: 9.0,
            min: 10.0,
        };
        assert_eq!(err.parameter(), Some("first"));
        assert_eq!(InputError::GameNotOver.parameter(), None);
        assert_eq!(
            InputError::InvertedRange {
                start: 5.0,
                end: 1.0
            }
            .parameter(),
            None
        );
    }
}
