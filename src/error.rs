use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the integrator core and the scenario loader.
///
/// Nothing in the library recovers from these: a failed step leaves the
/// trajectory unusable, so every variant is handed back to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown integration method or an invalid scenario value.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Vector operands with differing lengths.
    #[error("shape mismatch: expected length {expected}, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// Vector operation with nothing to operate on.
    #[error("empty vector input")]
    EmptyVector,

    /// Two bodies at the same position (force or potential is singular).
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    /// Body rejected at registration (mass or state out of range).
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Operation not allowed in the current lifecycle phase.
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_reports_both_lengths() {
        let e = Error::ShapeMismatch { expected: 3, found: 2 };
        let msg = format!("{e}");
        assert!(msg.contains("shape mismatch"));
        assert!(msg.contains('3') && msg.contains('2'));
    }

    #[test]
    fn configuration_error_carries_context() {
        let e = Error::Configuration("unknown integration method `leapfrog`".to_string());
        assert!(format!("{e}").contains("leapfrog"));
    }
}
