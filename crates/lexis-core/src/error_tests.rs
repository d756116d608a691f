//! Tests for `error` module

use super::error::*;

// -------------------------------------------------------------------------
// Error code tests
// -------------------------------------------------------------------------

#[test]
fn test_error_codes_are_unique() {
    // Arrange - create all error variants
    let errors: Vec<Error> = vec![
        Error::InvalidArgument("test".into()),
        Error::CorruptData("test".into()),
        Error::Io(std::io::Error::other("test")),
        Error::Config("test".into()),
        Error::Serialization("test".into()),
        Error::IndexNotFound("test".into()),
    ];

    // Act - collect all codes
    let codes: Vec<&str> = errors.iter().map(Error::code).collect();

    // Assert - all codes are unique and follow pattern
    let mut unique_codes = codes.clone();
    unique_codes.sort_unstable();
    unique_codes.dedup();
    assert_eq!(
        codes.len(),
        unique_codes.len(),
        "Error codes must be unique"
    );

    for code in &codes {
        assert!(
            code.starts_with("LEXIS-"),
            "Code {code} should start with LEXIS-"
        );
    }
}

#[test]
fn test_error_display_includes_code() {
    // Arrange
    let err = Error::InvalidArgument("term must not be empty".into());

    // Act
    let display = format!("{err}");

    // Assert
    assert!(display.contains("LEXIS-001"));
    assert!(display.contains("term must not be empty"));
}

#[test]
fn test_corrupt_data_is_not_recoverable() {
    assert!(!Error::CorruptData("bad terminator".into()).is_recoverable());
    assert!(Error::InvalidArgument("empty".into()).is_recoverable());
    assert!(Error::Io(std::io::Error::other("disk")).is_recoverable());
}

#[test]
fn test_io_error_conversion() {
    // Arrange
    let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");

    // Act
    let err: Error = io.into();

    // Assert
    assert_eq!(err.code(), "LEXIS-003");
    assert!(err.to_string().contains("short read"));
}

#[test]
fn test_config_error_conversion() {
    // Arrange
    let config_err = crate::config::ConfigError::InvalidValue {
        key: "search.max_edits_limit".to_string(),
        message: "too large".to_string(),
    };

    // Act
    let err: Error = config_err.into();

    // Assert
    assert_eq!(err.code(), "LEXIS-004");
    assert!(err.to_string().contains("search.max_edits_limit"));
}
