//! Analyzer module.
//!
//! The analyzer is organized into small, focused components:
//! - `core` - Analyzer, its state, and the tokenizer dispatch
//! - `header` - Header block (`Keyword: value` lines)
//! - `body` - Body classifier, dispatching on the leading character
//! - `number` - Decimal and radix-prefixed number literals
//! - `string` - String continuation, resumable across lines
//! - `comment` - Block comment continuation, resumable across lines

mod body;
mod comment;
mod core;
mod header;
mod number;
mod string;

pub use self::core::{Analyzer, AnalyzerConfig, AnalyzerState, Tokenizer};
