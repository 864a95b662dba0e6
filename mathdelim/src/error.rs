//! Error types for the fallible edges of the pipeline.
//!
//! Rewriting itself never fails. Errors only arise when converting a value
//! tree into a representation that cannot hold it, or when a stream source
//! fails mid-flight.

/// A value could not be converted to the requested representation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TraversalError {
    #[error("non-finite number {0} has no JSON representation")]
    NonFiniteNumber(f64),
    #[error("opaque value of {len} bytes has no JSON representation")]
    Opaque { len: usize },
}

/// Terminal error of a rewriting stream.
///
/// Emitted at most once; the stream ends after it.
#[derive(Debug, thiserror::Error)]
pub enum StreamError<E> {
    #[error("source stream failed")]
    Source(#[source] E),
}

impl<E> StreamError<E> {
    /// Returns the source's own error.
    pub fn into_source(self) -> E {
        match self {
            StreamError::Source(err) => err,
        }
    }
}
