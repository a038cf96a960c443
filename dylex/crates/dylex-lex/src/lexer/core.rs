//! Core analyzer implementation.
//!
//! This module contains the [`Analyzer`], the per-document
//! [`AnalyzerState`], and the [`Tokenizer`] that records where the next call
//! resumes.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::category::Category;
use crate::context::ContextStack;
use crate::stream::{LineStream, DEFAULT_TAB_SIZE};

/// The tokenizer that handles the next call.
///
/// Exactly one is active at a time. `Header` and `Body` are the two top-level
/// modes; `String` and `Comment` are continuations installed in the middle of
/// a construct and kept until it closes, possibly several lines later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Tokenizer {
    /// RFC-822 style header block at the top of the file
    Header,
    /// Program text
    Body,
    /// Inside a quoted literal that closes on `quote`
    String {
        /// The character that closes the literal
        quote: char,
        /// Category reported for every piece of the literal
        category: Category,
    },
    /// Inside a `/* ... */` comment
    Comment,
}

/// Settings shared by every document an [`Analyzer`] handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Indentation step of the host editor, in columns.
    pub indent_unit: u32,
    /// Tab width used when measuring a line's indentation.
    pub tab_size: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            indent_unit: 2,
            tab_size: DEFAULT_TAB_SIZE,
        }
    }
}

/// Per-document resumption state.
///
/// Created by [`Analyzer::start_state`], mutated by every
/// [`Analyzer::token`] call, and cheap to clone when a host wants to snapshot
/// the state at the end of a line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerState {
    /// Where the next call resumes.
    pub tokenizer: Tokenizer,
    /// Indentation contexts, innermost on top.
    pub contexts: ContextStack,
    /// Leading whitespace width of the line being tokenized.
    pub indented: usize,
}

impl AnalyzerState {
    /// Returns true once the header block has been closed.
    pub fn in_body(&self) -> bool {
        self.tokenizer != Tokenizer::Header
    }

    /// Returns true while a string or comment continuation is installed.
    pub fn in_continuation(&self) -> bool {
        matches!(
            self.tokenizer,
            Tokenizer::String { .. } | Tokenizer::Comment
        )
    }
}

/// Syntax classifier for Dylan.
///
/// The analyzer holds only configuration; everything that changes while a
/// document is classified lives in [`AnalyzerState`], so one analyzer can
/// serve any number of documents.
#[derive(Clone, Debug, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates an analyzer with the given configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Returns the analyzer's configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Builds the initial state for a document: header mode, with a single
    /// root context indented one unit left of `base_column`.
    pub fn start_state(&self, base_column: i32) -> AnalyzerState {
        let indent_unit = i32::try_from(self.config.indent_unit).unwrap_or(i32::MAX);
        AnalyzerState {
            tokenizer: Tokenizer::Header,
            contexts: ContextStack::new(base_column.saturating_sub(indent_unit)),
            indented: 0,
        }
    }

    /// Classifies the next lexeme of `stream`.
    ///
    /// Consumes at least one character, so the caller must not call it at
    /// end of line. A run of whitespace is consumed in one call and yields
    /// `None`, as does any character the active tokenizer has no category
    /// for.
    pub fn token(&self, stream: &mut LineStream<'_>, state: &mut AnalyzerState) -> Option<Category> {
        if stream.sol() {
            state.indented = stream.indentation();
        }
        if stream.eat_space() {
            return None;
        }
        Scanner { stream, state }.dispatch()
    }

    /// Handles a structurally empty line.
    ///
    /// The first empty line ends the header block; after that this is a
    /// no-op.
    pub fn blank_line(&self, state: &mut AnalyzerState) {
        if state.tokenizer == Tokenizer::Header {
            debug!("blank line closes header block");
            state.tokenizer = Tokenizer::Body;
        }
    }

    /// Indentation hint for a new line that starts with `text_after`.
    ///
    /// Always `0`: the analyzer does not compute indentation.
    pub fn indent(&self, _state: &AnalyzerState, _text_after: &str) -> i32 {
        0
    }

    /// Characters that should trigger re-indentation when typed.
    pub fn electric_chars(&self) -> &'static str {
        ";"
    }
}

/// One token request: the stream being read and the state it updates.
///
/// The per-tokenizer scanning routines are implemented on this type in the
/// sibling modules.
pub(super) struct Scanner<'s, 'a> {
    pub(super) stream: &'s mut LineStream<'a>,
    pub(super) state: &'s mut AnalyzerState,
}

impl Scanner<'_, '_> {
    /// Runs the active tokenizer.
    pub(super) fn dispatch(&mut self) -> Option<Category> {
        match self.state.tokenizer {
            Tokenizer::Header => self.header(),
            Tokenizer::Body => self.body(),
            Tokenizer::String { quote, category } => self.string(quote, category),
            Tokenizer::Comment => self.comment(),
        }
    }

    /// Installs `tokenizer` and lets it continue the current token.
    pub(super) fn chain(&mut self, tokenizer: Tokenizer) -> Option<Category> {
        trace!(?tokenizer, "continuation installed");
        self.state.tokenizer = tokenizer;
        self.dispatch()
    }

    /// Reinstalls the body tokenizer once a continuation closes.
    pub(super) fn close_continuation(&mut self) {
        trace!(from = ?self.state.tokenizer, "continuation closed");
        self.state.tokenizer = Tokenizer::Body;
    }
}
