use super::Error;
use crate::stmt::Value;

/// Error when a value cannot be converted to the expected type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    source_ty: Box<str>,
    to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.source_ty, self.to_type)
    }
}

impl Error {
    /// Creates a type conversion error for a [`Value`].
    pub fn type_conversion(value: Value, to_type: &'static str) -> Error {
        Error::type_conversion_from(value.kind_name(), to_type)
    }

    /// Creates a type conversion error from a description of the source type.
    ///
    /// Used when the source is not a [`Value`] yet, e.g. a JSON number that
    /// does not fit any value variant.
    pub fn type_conversion_from(source_ty: impl Into<String>, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            source_ty: source_ty.into().into(),
            to_type,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeConversion(_))
    }
}
