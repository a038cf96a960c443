//! Core error types for dylex-util crate
//!
//! The analyzer itself never fails; these errors only come from the checked
//! helpers ([`IndexVec::try_get`](crate::IndexVec::try_get),
//! [`Span::try_new`](crate::Span::try_new), ...) that hosts use when handling
//! indices or ranges that did not originate from the analyzer.

use thiserror::Error;

/// Error type for index vector operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexVecError {
    /// Index out of bounds
    #[error("Index out of bounds: index {index}, length {length}")]
    OutOfBounds { index: usize, length: usize },
}

/// Error type for span construction and slicing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for the line it was applied to
    #[error("Span out of bounds: line has {line_len} bytes, span is {span_start}..{span_end}")]
    OutOfBounds {
        line_len: usize,
        span_start: usize,
        span_end: usize,
    },

    /// Span does not fall on character boundaries
    #[error("Span {start}..{end} does not fall on a character boundary")]
    NotCharBoundary { start: usize, end: usize },
}

/// Result type alias for index vector operations
pub type IndexVecResult<T> = std::result::Result<T, IndexVecError>;

/// Result type alias for span operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;
