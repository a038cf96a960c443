//! Document-level driver.
//!
//! [`Highlighter`] plays the part of an editor host: it feeds lines to the
//! [`Analyzer`] in order, reports empty lines through
//! [`Analyzer::blank_line`], and records one [`Token`] per analyzer call.

use dylex_util::Span;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::category::Category;
use crate::lexer::{Analyzer, AnalyzerConfig, AnalyzerState};
use crate::stream::LineStream;

/// One classified piece of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Where the piece sits
    pub span: Span,
    /// Its category, or `None` for uncolored text
    pub category: Option<Category>,
}

impl Token {
    /// The token's text, given the line it came from.
    pub fn text<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.span.slice(line)
    }
}

/// The tokens of one line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTokens {
    /// Line number (1-based)
    pub line: u32,
    /// Tokens in line order; empty for a blank line
    pub tokens: Vec<Token>,
}

/// Runs the analyzer over a document, line by line.
///
/// The highlighter keeps the analyzer state between lines, so lines must be
/// fed in document order. To restart at a later line without re-running the
/// earlier ones, save [`copy_state`](Self::copy_state) after the line before
/// it and resume with [`with_state`](Self::with_state).
///
/// ```
/// use dylex_lex::{Category, Highlighter};
///
/// let mut highlighter = Highlighter::default();
/// let tokens = highlighter.highlight_line("Module: hello");
/// assert_eq!(tokens[0].category, Some(Category::HeaderKeyword));
///
/// assert!(highlighter.highlight_line("").is_empty());
/// assert!(highlighter.state().in_body());
/// ```
#[derive(Clone, Debug)]
pub struct Highlighter {
    analyzer: Analyzer,
    state: AnalyzerState,
    line: u32,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl Highlighter {
    /// Creates a highlighter positioned before the first line of a document.
    pub fn new(config: AnalyzerConfig) -> Self {
        let analyzer = Analyzer::new(config);
        let state = analyzer.start_state(0);
        Self {
            analyzer,
            state,
            line: 0,
        }
    }

    /// Resumes a document from a saved state. `line` is the number of the
    /// last line already processed.
    pub fn with_state(analyzer: Analyzer, state: AnalyzerState, line: u32) -> Self {
        Self {
            analyzer,
            state,
            line,
        }
    }

    /// Classifies the next line of the document.
    ///
    /// A trailing `\r` is ignored. An empty line yields no tokens and is
    /// reported to the analyzer as a blank line; a line holding only
    /// whitespace is not blank.
    pub fn highlight_line(&mut self, line: &str) -> Vec<Token> {
        self.line += 1;
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            self.analyzer.blank_line(&mut self.state);
            return Vec::new();
        }

        let mut stream = LineStream::with_tab_size(line, self.analyzer.config().tab_size);
        let mut tokens = Vec::new();
        while !stream.eol() {
            stream.start_token();
            let category = self.analyzer.token(&mut stream, &mut self.state);
            tokens.push(Token {
                span: Span::new(self.line, stream.start(), stream.position()),
                category,
            });
        }
        trace!(line = self.line, tokens = tokens.len(), "line classified");
        tokens
    }

    /// Classifies every line of `text`, continuing from the current state.
    pub fn highlight_document(&mut self, text: &str) -> Vec<LineTokens> {
        let lines: Vec<LineTokens> = text
            .lines()
            .map(|line| {
                let tokens = self.highlight_line(line);
                LineTokens {
                    line: self.line,
                    tokens,
                }
            })
            .collect();
        debug!(
            lines = lines.len(),
            in_body = self.state.in_body(),
            "document classified"
        );
        lines
    }

    /// The analyzer driving this highlighter.
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// The state after the last processed line.
    pub fn state(&self) -> &AnalyzerState {
        &self.state
    }

    /// A snapshot of the current state, for [`with_state`](Self::with_state).
    pub fn copy_state(&self) -> AnalyzerState {
        self.state.clone()
    }

    /// Number of the last processed line; 0 before the first.
    pub fn line_number(&self) -> u32 {
        self.line
    }
}

/// Classifies a whole document with the default configuration.
///
/// ```
/// use dylex_lex::{highlight, Category};
///
/// let lines = highlight("Module: m\n\ndefine constant $x = 1;");
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[2].tokens[0].category, Some(Category::Def));
/// ```
pub fn highlight(text: &str) -> Vec<LineTokens> {
    Highlighter::default().highlight_document(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Tokenizer;

    fn classified(line: &str, tokens: &[Token]) -> Vec<(String, Category)> {
        tokens
            .iter()
            .filter_map(|t| Some((t.text(line)?.to_string(), t.category?)))
            .collect()
    }

    #[test]
    fn test_tokens_cover_the_line() {
        let mut highlighter = Highlighter::default();
        let line = "Module:   dylan-user";
        let tokens = highlighter.highlight_line(line);

        let mut expected_start = 0;
        for token in &tokens {
            assert_eq!(token.span.line, 1);
            assert_eq!(token.span.start, expected_start);
            assert!(!token.span.is_empty());
            expected_start = token.span.end;
        }
        assert_eq!(expected_start, line.len());
    }

    #[test]
    fn test_tokens_are_not_merged() {
        let mut highlighter = Highlighter::default();
        let tokens = highlighter.highlight_line("Module: ab");
        // keyword (with one trailing char), then one value token per char
        assert_eq!(tokens.len(), 3);
        assert!(tokens[1..]
            .iter()
            .all(|t| t.category == Some(Category::HeaderValue)));
    }

    #[test]
    fn test_whitespace_only_line_is_not_blank() {
        let mut highlighter = Highlighter::default();
        let tokens = highlighter.highlight_line("   ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, None);
        assert!(!highlighter.state().in_body());
    }

    #[test]
    fn test_carriage_return_is_stripped() {
        let mut highlighter = Highlighter::default();
        assert!(highlighter.highlight_line("\r").is_empty());
        assert!(highlighter.state().in_body());

        let tokens = highlighter.highlight_line("x\r");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span.end, 1);
    }

    #[test]
    fn test_document_line_numbers() {
        let lines = highlight("Module: m\n\ndefine x");
        let numbers: Vec<_> = lines.iter().map(|l| l.line).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(lines[1].tokens.is_empty());
        assert_eq!(lines[2].tokens[0].span.line, 3);
    }

    #[test]
    fn test_empty_document() {
        assert!(highlight("").is_empty());
    }

    #[test]
    fn test_resume_from_copied_state() {
        let text = ["Module: m", "", "x := \"open", "still\" y"];

        let mut full = Highlighter::default();
        let all: Vec<_> = text.iter().map(|l| full.highlight_line(l)).collect();

        let mut first = Highlighter::default();
        for line in &text[..3] {
            first.highlight_line(line);
        }
        let saved = first.copy_state();
        assert!(saved.in_continuation());

        let mut resumed = Highlighter::with_state(first.analyzer().clone(), saved, 3);
        let last = resumed.highlight_line(text[3]);
        assert_eq!(last, all[3]);
        assert_eq!(resumed.line_number(), 4);
    }

    #[test]
    fn test_header_then_body() {
        let mut highlighter = Highlighter::default();
        let header = "Module: hello";
        let tokens = highlighter.highlight_line(header);
        assert_eq!(
            classified(header, &tokens)[0],
            ("Module: ".to_string(), Category::HeaderKeyword)
        );

        highlighter.highlight_line("");
        let body = "define method main () end;";
        let tokens = highlighter.highlight_line(body);
        let classes = classified(body, &tokens);
        assert_eq!(classes[0], ("define".to_string(), Category::Def));
        assert_eq!(classes[1], ("method".to_string(), Category::Variable));
        assert_eq!(highlighter.state().tokenizer, Tokenizer::Body);
    }

    #[test]
    fn test_tab_size_follows_config() {
        let mut highlighter = Highlighter::new(AnalyzerConfig {
            tab_size: 8,
            ..AnalyzerConfig::default()
        });
        highlighter.highlight_line("");
        highlighter.highlight_line("\tx");
        assert_eq!(highlighter.state().indented, 8);
    }
}
