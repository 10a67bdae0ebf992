use thiserror::Error;

/// Failures of the mutating tree operations.
///
/// Every variant leaves the tree exactly as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("the root node already exists")]
    DuplicateRoot,

    #[error("root node not found")]
    MissingRoot,

    #[error("parent node not found")]
    ParentNotFound,

    #[error("node has reached the maximum number of children ({arity})")]
    CapacityExceeded { arity: usize },
}

pub type TreeResult<T> = Result<T, TreeError>;
