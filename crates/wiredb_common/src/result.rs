//! Common result and error types for the wiredb crates.

/// The standard result type for fallible internal operations.
///
/// `Err` indicates an unrecoverable internal error (a bug in wiredb or
/// mutually inconsistent input databases), not an ordinary user-facing
/// error. Expected "not found" and "no route" outcomes are expressed with
/// `Option` and dedicated error enums instead.
pub type WireDbResult<T> = Result<T, InternalError>;

/// An internal error indicating a bug or corrupted input, not a normal
/// analysis outcome.
///
/// These errors should never occur during normal operation and must not be
/// silently tolerated by callers.
#[derive(Debug, thiserror::Error)]
#[error("internal error: {message}")]
pub struct InternalError {
    /// Description of the internal error.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let err = InternalError::new("wire table corrupted");
        assert_eq!(format!("{err}"), "internal error: wire table corrupted");
    }

    #[test]
    fn ok_path() {
        let r: WireDbResult<i32> = Ok(42);
        assert_eq!(r.ok(), Some(42));
    }

    #[test]
    fn from_string() {
        let err: InternalError = "from string".to_string().into();
        assert_eq!(err.message, "from string");
    }
}
