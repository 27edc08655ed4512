//! Configuration errors
//!
//! The simulation itself never fails; only tuning input can be rejected.

use core::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum TuningError {
    /// The JSON could not be parsed into a `Tuning`
    Parse(String),
    /// A field is outside the range the physics can work with
    OutOfRange { field: &'static str, value: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid tuning json: {msg}"),
            Self::OutOfRange { field, value } => {
                write!(f, "tuning field `{field}` out of range: {value}")
            }
        }
    }
}

impl std::error::Error for TuningError {}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = TuningError::OutOfRange {
            field: "friction",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "tuning field `friction` out of range: 1.5");
    }

    #[test]
    fn test_from_serde_error() {
        let err: TuningError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, TuningError::Parse(_)));
    }
}
