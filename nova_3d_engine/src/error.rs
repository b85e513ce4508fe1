//! Error types for the Nova3D engine
//!
//! Transform and camera math never fail; errors only come from scene
//! bookkeeping (unknown keys, camera indices) and from the renderer
//! collaborator.

use std::fmt;

/// Result type for Nova3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nova3D engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Renderer collaborator failure (upload, draw submission, ...)
    BackendError(String),

    /// Invalid resource (unknown entity key, camera index out of range, ...)
    InvalidResource(String),

    /// Initialization failed (application or demo setup)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an ERROR entry and build an `Error::InvalidResource` with the same message
///
/// # Example
///
/// ```no_run
/// # use nova_3d_engine::engine_err;
/// let err = engine_err!("nova3d::Scene", "Camera index {} out of range", 7);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::nova3d::Error::InvalidResource(message)
    }};
}

/// Log an ERROR entry and return early with `Error::InvalidResource`
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
