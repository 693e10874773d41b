//! Error types for the form-fill library.
//!
//! Absent or loosely-typed style data is never an error; those cases resolve
//! to documented defaults. Errors here are reserved for conditions that must
//! abort the operation that triggered them.

/// Result type alias for form-fill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while synthesizing field appearances.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize a composed operator sequence to bytes.
    ///
    /// Fatal to the render call; the triggering setter or save hook aborts
    /// and the field keeps its previous appearance link.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Referenced object not found in the store
    #[error("Object not found: {0} {1} R")]
    ObjectNotFound(u32, u16),

    /// Object has wrong type
    #[error("Invalid object type: expected {expected}, found {found}")]
    InvalidObjectType {
        /// Expected object type
        expected: String,
        /// Actual object type found
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_object_type_error() {
        let err = Error::InvalidObjectType {
            expected: "Dictionary".to_string(),
            found: "Array".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Dictionary"));
        assert!(msg.contains("Array"));
    }

    #[test]
    fn test_object_not_found_error() {
        let err = Error::ObjectNotFound(10, 0);
        assert!(format!("{}", err).contains("10 0 R"));
    }

    #[test]
    fn test_io_error_wraps() {
        let io = std::io::Error::new(std::io::ErrorKind::WriteZero, "buffer full");
        let err = Error::from(io);
        assert!(format!("{}", err).contains("buffer full"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
