use thiserror::Error;

/// Result type alias for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Errors raised by the fixture functions and the call graph
#[derive(Error, Debug)]
pub enum FixtureError {
    /// A required key was absent from the user mapping
    #[error("missing key: '{0}'")]
    MissingKey(String),

    #[error("division by zero: {dividend:?} / 0")]
    DivisionByZero { dividend: f64 },

    #[error("node already exists: {0}")]
    DuplicateNode(String),

    /// An edge referenced a function that is not in the graph
    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl FixtureError {
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, FixtureError::DivisionByZero { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_display() {
        let err = FixtureError::MissingKey("email".to_string());
        assert_eq!(err.to_string(), "missing key: 'email'");
    }

    #[test]
    fn test_division_by_zero_display() {
        let err = FixtureError::DivisionByZero { dividend: 10.0 };
        assert_eq!(err.to_string(), "division by zero: 10.0 / 0");
        assert!(err.is_division_by_zero());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: FixtureError = io.into();
        assert!(matches!(err, FixtureError::Io(_)));
        assert!(!err.is_division_by_zero());
    }
}
