//! Push-throughput run parameters.

use std::error::Error;
use std::fmt;

/// Parameters for one push-throughput comparison.
///
/// Each trial appends `count` copies of `value` to a fresh container and
/// times the whole fill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Elements appended per trial. Must be at least 1.
    pub count: usize,

    /// Trials per container. Must be at least 1.
    pub trials: usize,

    /// The string cloned into every slot.
    pub value: String,

    /// Reserve `count` slots before each fill.
    ///
    /// With reservation off every trial pays for the full doubling sequence.
    pub reserve: bool,
}

impl BenchConfig {
    /// Default elements per trial.
    pub const DEFAULT_COUNT: usize = 1_000_000;

    /// Default number of trials.
    pub const DEFAULT_TRIALS: usize = 5;

    /// Default payload.
    pub const DEFAULT_VALUE: &'static str = "This is my test string";

    /// A config for `count` elements per trial, defaults elsewhere.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            trials: Self::DEFAULT_TRIALS,
            value: Self::DEFAULT_VALUE.to_owned(),
            reserve: true,
        }
    }

    /// Check that the run would do any work.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.count == 0 {
            return Err(BenchError::InvalidConfig {
                field: "count",
                reason: "must be at least 1".to_owned(),
            });
        }
        if self.trials == 0 {
            return Err(BenchError::InvalidConfig {
                field: "trials",
                reason: "must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COUNT)
    }
}

/// Errors from setting up a benchmark run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BenchError {
    /// A [`BenchConfig`] field failed validation.
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid bench config: {field} {reason}")
            }
        }
    }
}

impl Error for BenchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = BenchConfig::default();
        assert_eq!(c.count, 1_000_000);
        assert_eq!(c.trials, 5);
        assert_eq!(c.value, "This is my test string");
        assert!(c.reserve);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_count_rejected() {
        let err = BenchConfig::new(0).validate().unwrap_err();
        assert_eq!(
            err,
            BenchError::InvalidConfig {
                field: "count",
                reason: "must be at least 1".to_owned()
            }
        );
        assert_eq!(err.to_string(), "invalid bench config: count must be at least 1");
    }

    #[test]
    fn zero_trials_rejected() {
        let c = BenchConfig {
            trials: 0,
            ..BenchConfig::new(10)
        };
        assert!(matches!(
            c.validate(),
            Err(BenchError::InvalidConfig { field: "trials", .. })
        ));
    }
}
