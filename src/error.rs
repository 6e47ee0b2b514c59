use thiserror::Error;

/// Errors reported by [`Sequence`](crate::Sequence) operations.
///
/// Every error is raised synchronously, and always before any mutation has
/// taken place: an operation that fails leaves the sequence exactly as it
/// was. Nothing is retried or recovered internally; recovery is the
/// caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index-based operation was called with a position outside its
    /// valid interval.
    ///
    /// Read, replace and remove operations accept `0..len`; insertion
    /// additionally accepts the past-the-end position `len`.
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange {
        /// The offending position.
        index: usize,
        /// The sequence length at the time of the call.
        len: usize,
    },

    /// An endpoint accessor or mutator was called on an empty sequence.
    #[error("sequence is empty")]
    Empty,

    /// The operation is part of the sequential-collection contract but is
    /// not supported by this container, by design. It never succeeds.
    #[error("unsupported operation `{0}`")]
    Unsupported(&'static str),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn error_display() {
        assert_eq!(
            Error::OutOfRange { index: 4, len: 3 }.to_string(),
            "index 4 out of range for sequence of length 3"
        );
        assert_eq!(Error::Empty.to_string(), "sequence is empty");
        assert_eq!(
            Error::Unsupported("retain_all").to_string(),
            "unsupported operation `retain_all`"
        );
    }
}
