//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("constant upload failed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("constant upload failed"));
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("Camera index 3 out of range".to_string());
    let display = format!("{}", err);
    assert_eq!(display, "Invalid resource: Camera index 3 out of range");
}

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("Scene has no camera".to_string());
    let display = format!("{}", err);
    assert!(display.starts_with("Initialization failed"));
    assert!(display.contains("Scene has no camera"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidResource("entity".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug_names_variant() {
    assert!(format!("{:?}", Error::BackendError("x".to_string())).contains("BackendError"));
    assert!(format!("{:?}", Error::InvalidResource("x".to_string())).contains("InvalidResource"));
    assert!(format!("{:?}", Error::InitializationFailed("x".to_string())).contains("InitializationFailed"));
}

#[test]
fn test_error_clone_and_eq() {
    let err = Error::BackendError("draw".to_string());
    assert_eq!(err.clone(), err);
    assert_ne!(err, Error::InvalidResource("draw".to_string()));
}

// ============================================================================
// RESULT TYPE TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<i32> {
        Err(Error::InvalidResource("missing".to_string()))
    }

    fn outer() -> Result<i32> {
        inner()?;
        Ok(42)
    }

    assert_eq!(outer(), Err(Error::InvalidResource("missing".to_string())));
}
