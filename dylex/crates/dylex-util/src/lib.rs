//! dylex-util - Foundation types shared by the dylex crates
//!
//! This crate holds the small, dependency-light building blocks that the
//! analyzer and its hosts agree on:
//!
//! - [`index_vec`] - vectors addressed by typed indices, used as arenas
//!   (the analyzer keeps its context chain in one)
//! - [`span`] - line-relative source ranges for classified tokens
//! - [`error`] - error types for the fallible helpers in this crate
//!
//! Nothing here knows about Dylan, so a host can reuse the types for its own
//! bookkeeping.

#![warn(missing_docs)]

pub mod error;
pub mod index_vec;
pub mod span;

pub use error::{IndexVecError, IndexVecResult, SpanError, SpanResult};
pub use index_vec::{Idx, IndexVec};
pub use span::Span;

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
