//! dylex-lex - Incremental syntax classifier for Dylan source files
//!
//! This crate classifies Dylan source text for syntax coloring. It is driven
//! one line at a time by a host (an editor, or the `dylext` CLI), and keeps
//! just enough state between calls to resume in the middle of a multi-line
//! string or block comment.
//!
//! # Overview
//!
//! A Dylan file has two parts: an RFC-822 style header block
//! (`Module: dylan-user`), then a blank line, then the program body. The
//! analyzer starts in header mode and switches to body mode for good on the
//! first empty line the host reports.
//!
//! Each call to [`Analyzer::token`] consumes at least one character from a
//! [`LineStream`] and returns a [`Category`], or `None` for text that gets no
//! highlighting (whitespace, punctuation).
//!
//! # Example Usage
//!
//! ```
//! use dylex_lex::{Analyzer, AnalyzerConfig, Category, LineStream};
//!
//! let analyzer = Analyzer::new(AnalyzerConfig::default());
//! let mut state = analyzer.start_state(0);
//!
//! // Header line, then the blank line that ends the header.
//! let mut stream = LineStream::new("Module: hello");
//! assert_eq!(analyzer.token(&mut stream, &mut state), Some(Category::HeaderKeyword));
//! analyzer.blank_line(&mut state);
//!
//! let mut stream = LineStream::new("define method");
//! assert_eq!(analyzer.token(&mut stream, &mut state), Some(Category::Def));
//! ```
//!
//! For whole documents, [`Highlighter`] runs the per-line loop and produces
//! spans.
//!
//! # Module Structure
//!
//! - [`stream`] - Cursor over a single line of text
//! - [`category`] - The closed set of token categories
//! - [`lexer`] - Analyzer state machine (header, body, continuations)
//! - [`context`] - Indentation context chain
//! - [`symbol`] - Character classes and special symbol shapes
//! - [`mode`] - Mode registry (name, MIME type, file extensions)
//! - [`highlight`] - Document-level driver

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod category;
pub mod context;
pub mod error;
pub mod highlight;
pub mod lexer;
pub mod mode;
pub mod stream;
pub mod symbol;

mod edge_cases;

// Re-export main types for convenience
pub use category::Category;
pub use context::{Context, ContextId, ContextKind, ContextStack};
pub use error::{ContextError, UnknownCategory};
pub use highlight::{highlight, Highlighter, LineTokens, Token};
pub use lexer::{Analyzer, AnalyzerConfig, AnalyzerState, Tokenizer};
pub use mode::{all_modes, find_by_extension, find_by_mime, find_by_name, ModeInfo, DYLAN};
pub use stream::LineStream;
pub use symbol::{symbol_shape, SymbolShape};
