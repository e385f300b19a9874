/// Errors produced by cursor arithmetic and by position-based mutators.
///
/// A mutator that returns one of these leaves its container untouched.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// A list position was combined with a vector position.
    #[error("cannot mix a list position with a vector position")]
    KindMismatch,
    /// The cursors belong to different containers.
    #[error("cursors belong to different containers")]
    ForeignContainer,
    /// The position refers to a node that has been erased.
    #[error("position no longer refers to a live element")]
    Dangling,
    /// Neither position can be reached from the other by walking the chain.
    #[error("positions are not reachable from each other")]
    Unreachable,
    /// The move would leave the `begin..=end` range.
    #[error("moving by {offset} leaves the `begin..=end` range")]
    OutOfBounds { offset: isize },
    /// The end of a range precedes its start.
    #[error("range end precedes range start")]
    InvertedRange,
}

#[cfg(test)]
mod tests {
    use super::CursorError;

    #[test]
    fn error_messages() {
        assert_eq!(
            CursorError::OutOfBounds { offset: -3 }.to_string(),
            "moving by -3 leaves the `begin..=end` range"
        );
        assert_eq!(
            CursorError::KindMismatch.to_string(),
            "cannot mix a list position with a vector position"
        );
    }
}
