use super::Error;

/// Error when a row in a result set is not a record.
///
/// Folding only makes sense over records. A row that is a scalar, a list, or
/// a JSON value other than an object cannot carry attributes, so it is
/// reported instead of being skipped.
#[derive(Debug)]
pub(super) struct InvalidRowError {
    message: Box<str>,
}

impl std::error::Error for InvalidRowError {}

impl core::fmt::Display for InvalidRowError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid row: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid row error.
    pub fn invalid_row(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRow(InvalidRowError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid row error.
    pub fn is_invalid_row(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRow(_))
    }
}
