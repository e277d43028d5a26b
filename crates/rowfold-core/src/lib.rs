mod error;
pub use error::{Error, IntoError};

pub mod stmt;

/// A Result type alias that uses rowfold's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
