//! Error types for the geodensity crates
//!
//! Provides a unified error type shared by the core and estimator crates.

use thiserror::Error;

/// Core error type for density estimation operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Observation count exceeds a configured cap
    #[error("Observation cap exceeded: cap is {cap}, got {actual} observations")]
    ObservationCapExceeded { cap: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a non-positive or non-finite bandwidth
    pub fn invalid_bandwidth(sigma: f64) -> Self {
        Self::InvalidParameter(format!("Bandwidth {sigma} must be positive and finite"))
    }

    /// Create an error for a degenerate grid size
    pub fn invalid_grid_size(grid_size: usize) -> Self {
        Self::InvalidParameter(format!("Grid size {grid_size} must be at least 1"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidParameter(format!("{context} must be finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("bandwidth must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: bandwidth must be positive");

        let err = Error::InvalidInput("samples contain NaN".to_string());
        assert_eq!(err.to_string(), "Invalid input: samples contain NaN");

        let err = Error::ObservationCapExceeded { cap: 80_000, actual: 80_001 };
        assert_eq!(
            err.to_string(),
            "Observation cap exceeded: cap is 80000, got 80001 observations"
        );

        let err = Error::Computation("kernel sum overflowed".to_string());
        assert_eq!(err.to_string(), "Computation error: kernel sum overflowed");

        let err = Error::Execution("thread pool exhausted".to_string());
        assert_eq!(err.to_string(), "Execution error: thread pool exhausted");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::invalid_bandwidth(-1.0);
        assert_eq!(err.to_string(), "Invalid parameter: Bandwidth -1 must be positive and finite");

        let err = Error::invalid_grid_size(0);
        assert_eq!(err.to_string(), "Invalid parameter: Grid size 0 must be at least 1");

        let err = Error::non_finite("projection radius");
        assert_eq!(err.to_string(), "Invalid parameter: projection radius must be finite");
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom error message"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function(succeed: bool) -> Result<i32> {
            if succeed {
                Ok(42)
            } else {
                Err(Error::Computation("test failure".to_string()))
            }
        }

        assert_eq!(test_function(true).unwrap(), 42);
        assert!(test_function(false).is_err());
    }
}
