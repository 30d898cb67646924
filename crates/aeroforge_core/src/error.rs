use std::fmt;

use crate::model::StochasticField;

/// Errors raised when the engine is handed input it cannot evaluate.
///
/// Physically implausible sampled values are not errors; the sampler's
/// floor/clip policy corrects them.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// A run was requested with zero trials
    NoRuns,
    /// Statistics were requested over an empty result set
    EmptyResults,
    /// Two sequences that must be index-aligned have different lengths
    LengthMismatch { expected: usize, actual: usize },
    /// A sampled field has zero variance, so its correlation is undefined
    DegenerateField(StochasticField),
    /// The result vector has zero variance, so no correlation is defined
    DegenerateResults,
    /// `g * l_over_d * sfc_eq * m_total_kg` is zero for the nominal set
    ZeroDenominator,
    NonFiniteParameter { name: &'static str, value: f64 },
    InvalidNoise {
        field: StochasticField,
        reason: &'static str,
    },
    /// A configured value outside its accepted domain
    Config(String),
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NoRuns => write!(f, "number of runs must be at least 1"),
            InvalidInput::EmptyResults => write!(f, "result set is empty"),
            InvalidInput::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {expected} values, got {actual}")
            }
            InvalidInput::DegenerateField(field) => write!(
                f,
                "field '{}' has zero variance; correlation is undefined",
                field.key()
            ),
            InvalidInput::DegenerateResults => {
                write!(f, "results have zero variance; correlation is undefined")
            }
            InvalidInput::ZeroDenominator => {
                write!(f, "g * l_over_d * sfc_eq * m_total_kg must be non-zero")
            }
            InvalidInput::NonFiniteParameter { name, value } => {
                write!(f, "parameter '{name}' must be finite (got {value})")
            }
            InvalidInput::InvalidNoise { field, reason } => {
                write!(f, "invalid noise model for '{}': {reason}", field.key())
            }
            InvalidInput::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for InvalidInput {}

pub type Result<T> = std::result::Result<T, InvalidInput>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_field() {
        let err = InvalidInput::DegenerateField(StochasticField::HarvestPower);
        assert!(err.to_string().contains("harvest"));

        let err = InvalidInput::InvalidNoise {
            field: StochasticField::SystemEfficiency,
            reason: "ceiling below floor",
        };
        assert_eq!(
            err.to_string(),
            "invalid noise model for 'eta': ceiling below floor"
        );
    }
}
