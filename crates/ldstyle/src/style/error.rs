//! Style resolution errors.

use thiserror::Error;

use super::spec::BoxError;

/// Error returned when resolving a style specification fails.
///
/// Unknown properties and tokens never fail; they pass through unchanged.
/// The only failures are broken generators, and any failure aborts the whole
/// resolution without a partial result.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A generator returned an error.
    #[error("style generator failed: {0}")]
    Generator(#[source] BoxError),

    /// Generators kept producing generators past the nesting limit.
    #[error("style generators nested deeper than {limit} levels")]
    GeneratorDepth { limit: usize },
}

impl StyleError {
    pub(crate) fn generator(source: BoxError) -> Self {
        StyleError::Generator(source)
    }
}
