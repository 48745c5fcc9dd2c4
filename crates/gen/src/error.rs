//! The generation error taxonomy.

/// Errors that abort a generation pass.
///
/// Local recoveries are deliberately absent from this list: a weighted draw
/// that selects nothing, a Random branch overrunning its limit, and a Repeat
/// loop running out of space all terminate their mode loop silently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// A schema or child referenced a title that is not in the library.
    #[error("unknown possibility '{title}'")]
    UnknownPossibility { title: String },

    /// A `Final` child did not name the possibility whose dimensions to
    /// adopt.
    #[error("final child '{title}' names no source possibility")]
    MissingFinalSource { title: String },

    /// A possibility with children to lay out resolved no packing direction.
    #[error("possibility '{title}' resolves no layout direction")]
    MissingDirection { title: String },

    /// Generation recursed deeper than the configured ceiling, which almost
    /// always means two schemas re-expand each other without consuming space.
    #[error("generating '{title}' exceeded the recursion ceiling of {limit}")]
    DepthLimitExceeded { title: String, limit: usize },
}

/// The result type of generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
