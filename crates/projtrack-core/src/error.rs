//! Error types for projtrack

use thiserror::Error;

/// Result type alias using projtrack's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Projtrack error types
///
/// Display strings double as the console's error reports, so they are
/// written for the person at the keyboard, not for a log file.
#[derive(Error, Debug)]
pub enum Error {
    // Input errors
    #[error("{0} is not a valid number.")]
    InvalidNumber(String),

    #[error("{0} is not a valid decimal number.")]
    InvalidDecimal(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_display() {
        let err = Error::InvalidNumber("abc".to_string());
        assert_eq!(err.to_string(), "abc is not a valid number.");
    }

    #[test]
    fn test_invalid_decimal_display() {
        let err = Error::InvalidDecimal("1.2.3".to_string());
        assert_eq!(err.to_string(), "1.2.3 is not a valid decimal number.");
    }

    #[test]
    fn test_database_error_display_prefix() {
        let err = Error::Database(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Database error: "));
    }
}
