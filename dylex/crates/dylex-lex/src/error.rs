//! Error types for dylex-lex.
//!
//! Classification itself is total and has no error path. These errors cover
//! the edges around it: manipulating or loading the context chain and parsing category
//! names supplied by a host.

use thiserror::Error;

/// Error type for context chain operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    /// Attempted to pop the root context
    #[error("cannot pop the root context")]
    RootPop,

    /// A loaded context chain holds no records
    #[error("context chain is empty")]
    EmptyChain,

    /// A loaded root context is not a `top` context without a parent
    #[error("root context must be a top context with no enclosing context")]
    InvalidRoot,

    /// A loaded context does not point at the record directly below it
    #[error("context {index} does not enclose into context {expected}")]
    BrokenLink {
        /// Position of the offending record
        index: usize,
        /// Position its `prev` link must name
        expected: usize,
    },
}

/// A category name that is not one of the analyzer's categories.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown token category: {0}")]
pub struct UnknownCategory(pub String);
