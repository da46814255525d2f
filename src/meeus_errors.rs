use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeeusError {
    #[error("Input out of range: {0}")]
    OutOfRange(String),

    #[error("Solver did not converge after {iterations} iterations (last step: {residual:e} day)")]
    NonConvergence { iterations: usize, residual: f64 },

    #[error("Invalid solver parameter: {0}")]
    InvalidParameter(String),

    #[error("Unable to parse sexagesimal value: {0}")]
    InvalidSexagesimal(String),

    #[error("System clock unavailable: {0}")]
    ClockUnavailable(String),
}

#[cfg(test)]
mod meeus_errors_test {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeeusError::OutOfRange("julian day -1".into());
        assert_eq!(err.to_string(), "Input out of range: julian day -1");

        let err = MeeusError::NonConvergence {
            iterations: 20,
            residual: 1e-3,
        };
        assert_eq!(
            err.to_string(),
            "Solver did not converge after 20 iterations (last step: 1e-3 day)"
        );
    }
}
