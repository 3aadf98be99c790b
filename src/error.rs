//! Error types for tree operations.
//!
//! The only fallible operation is [`insert`](crate::tree::Tree::insert);
//! every query is total over every tree state, including the empty tree.

use thiserror::Error;

/// Errors raised by [`Tree`](crate::tree::Tree) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// An absent value was passed to `insert`. The tree never stores an
    /// absent value, so the call is rejected and the tree is left
    /// unchanged.
    #[error("cannot insert an absent value into the tree")]
    AbsentValue,
}

/// Convenience alias for results of tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
