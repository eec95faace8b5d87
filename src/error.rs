//! Everything that can go wrong, in one enum.

use core::fmt;

/// Errors reported by [`LanguageModel`](crate::LanguageModel) and
/// [`ContextDistribution`](crate::ContextDistribution).
///
/// A generation lookup that misses the context map is not in here: that is a
/// documented early stop, not a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The window length handed to the model constructor was zero.
    WindowLength(usize),
    /// The seed text handed to `generate` cannot fill a single window.
    SeedTooShort { required: usize, actual: usize },
    /// A record was requested at a position no record occupies.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowLength(got) => {
                write!(f, "window length must be positive, got {got}")
            }
            Error::SeedTooShort { required, actual } => {
                write!(
                    f,
                    "seed text must hold at least {required} characters, got {actual}"
                )
            }
            Error::IndexOutOfRange { index, len } => {
                write!(f, "record index {index} out of range for {len} records")
            }
        }
    }
}

impl std::error::Error for Error {}
