//! Line cursor handed to the analyzer by its host.
//!
//! This module provides [`LineStream`], which walks a single line of text. The
//! host creates one per line, marks the start of each token with
//! [`start_token`](LineStream::start_token), and asks the analyzer for a
//! category until [`eol`](LineStream::eol) is reached. Everything the analyzer
//! needs to remember across lines lives in
//! [`AnalyzerState`](crate::AnalyzerState), never in the stream.

/// Default tab width used by [`LineStream::indentation`].
pub const DEFAULT_TAB_SIZE: usize = 4;

/// A cursor over one line of source text.
///
/// The cursor tracks two byte offsets: `start`, where the token being built
/// began, and `position`, the next character to read. Offsets always sit on
/// character boundaries.
///
/// # Example
///
/// ```
/// use dylex_lex::LineStream;
///
/// let mut stream = LineStream::new("define method");
/// assert!(stream.sol());
/// assert!(stream.match_str("define"));
/// assert_eq!(stream.current(), "define");
/// assert!(stream.eat_space());
/// assert_eq!(stream.remaining(), "method");
/// ```
#[derive(Clone, Debug)]
pub struct LineStream<'a> {
    /// The line being traversed, without its line terminator.
    line: &'a str,

    /// Current byte position in the line.
    position: usize,

    /// Byte position where the current token starts.
    start: usize,

    /// Width of a tab stop, for indentation measurement.
    tab_size: usize,
}

impl<'a> LineStream<'a> {
    /// Creates a new stream at the start of `line`.
    pub fn new(line: &'a str) -> Self {
        Self::with_tab_size(line, DEFAULT_TAB_SIZE)
    }

    /// Creates a new stream with a custom tab width.
    pub fn with_tab_size(line: &'a str, tab_size: usize) -> Self {
        Self {
            line,
            position: 0,
            start: 0,
            tab_size: tab_size.max(1),
        }
    }

    /// Returns true if the cursor is at the start of the line.
    #[inline]
    pub fn sol(&self) -> bool {
        self.position == 0
    }

    /// Returns true if the cursor is at the end of the line.
    #[inline]
    pub fn eol(&self) -> bool {
        self.position >= self.line.len()
    }

    /// Returns the character at the cursor without consuming it.
    ///
    /// ```
    /// use dylex_lex::LineStream;
    ///
    /// let stream = LineStream::new("#t");
    /// assert_eq!(stream.peek(), Some('#'));
    /// assert_eq!(LineStream::new("").peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<char> {
        // Fast path for ASCII (most common case)
        match self.line.as_bytes().get(self.position) {
            None => None,
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => self.line[self.position..].chars().next(),
        }
    }

    /// Consumes and returns the character at the cursor.
    ///
    /// Returns `None` (and does not move) at the end of the line.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Advances by `count` bytes, clamped to the end of the line.
    ///
    /// The caller must land on a character boundary; the analyzer only uses
    /// it after measuring an ASCII prefix.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        self.position = (self.position + count).min(self.line.len());
    }

    /// Consumes the expected character if it is next.
    ///
    /// ```
    /// use dylex_lex::LineStream;
    ///
    /// let mut stream = LineStream::new("/*");
    /// assert!(stream.eat('/'));
    /// assert!(!stream.eat('/'));
    /// assert!(stream.eat('*'));
    /// ```
    pub fn eat(&mut self, expected: char) -> bool {
        self.eat_if(|c| c == expected)
    }

    /// Consumes the next character if it satisfies `pred`.
    pub fn eat_if(&mut self, pred: impl FnOnce(char) -> bool) -> bool {
        match self.peek() {
            Some(c) if pred(c) => {
                self.position += c.len_utf8();
                true
            },
            _ => false,
        }
    }

    /// Consumes characters while `pred` holds. Returns true if any were
    /// consumed.
    ///
    /// ```
    /// use dylex_lex::LineStream;
    ///
    /// let mut stream = LineStream::new("1010b");
    /// assert!(stream.eat_while(|c| c == '0' || c == '1'));
    /// assert_eq!(stream.remaining(), "b");
    /// ```
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> bool {
        let begin = self.position;
        let len = self.remaining()
            .find(|c: char| !pred(c))
            .unwrap_or_else(|| self.line.len() - self.position);
        self.position += len;
        self.position > begin
    }

    /// Consumes a run of whitespace. Returns true if any was consumed.
    pub fn eat_space(&mut self) -> bool {
        self.eat_while(crate::symbol::is_space)
    }

    /// Moves the cursor to the end of the line.
    pub fn skip_to_end(&mut self) {
        self.position = self.line.len();
    }

    /// Moves the cursor up to (not past) the next occurrence of `ch`.
    ///
    /// Returns false, leaving the cursor where it was, if `ch` does not occur
    /// in the rest of the line.
    ///
    /// ```
    /// use dylex_lex::LineStream;
    ///
    /// let mut stream = LineStream::new("/= x");
    /// assert!(stream.skip_to(' '));
    /// assert_eq!(stream.position(), 2);
    ///
    /// let mut stream = LineStream::new("/=");
    /// assert!(!stream.skip_to(' '));
    /// assert_eq!(stream.position(), 0);
    /// ```
    pub fn skip_to(&mut self, ch: char) -> bool {
        match self.remaining().find(ch) {
            Some(offset) => {
                self.position += offset;
                true
            },
            None => false,
        }
    }

    /// Consumes `text` if the rest of the line starts with it.
    pub fn match_str(&mut self, text: &str) -> bool {
        if self.remaining().starts_with(text) {
            self.position += text.len();
            true
        } else {
            false
        }
    }

    /// Consumes `word` only if it is not immediately followed by a symbol
    /// character, so `define` matches in `define method` but not in
    /// `defined?`.
    pub fn match_keyword(&mut self, word: &str) -> bool {
        let rest = self.remaining();
        let bounded = rest.starts_with(word)
            && !rest[word.len()..]
                .chars()
                .next()
                .is_some_and(crate::symbol::is_symbol_char);
        if bounded {
            self.position += word.len();
        }
        bounded
    }

    /// Consumes a prefix whose length is computed by `scan` from the rest of
    /// the line. A `None` or zero length consumes nothing and returns false.
    pub fn match_with(&mut self, scan: impl FnOnce(&str) -> Option<usize>) -> bool {
        match scan(self.remaining()) {
            Some(len) if len > 0 => {
                self.position = (self.position + len).min(self.line.len());
                true
            },
            _ => false,
        }
    }

    /// Moves the cursor back by `bytes`, never before the token start.
    pub fn backup(&mut self, bytes: usize) {
        self.position = self.position.saturating_sub(bytes).max(self.start);
    }

    /// Marks the current position as the start of a new token.
    #[inline]
    pub fn start_token(&mut self) {
        self.start = self.position;
    }

    /// Returns the text of the token being built (`start..position`).
    pub fn current(&self) -> &'a str {
        &self.line[self.start..self.position]
    }

    /// Returns the line from the cursor to the end.
    pub fn remaining(&self) -> &'a str {
        &self.line[self.position..]
    }

    /// Returns the whole line.
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Returns the current byte position in the line.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the byte position where the current token starts.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Width of the line's leading whitespace, expanding tabs to the next tab
    /// stop.
    ///
    /// ```
    /// use dylex_lex::LineStream;
    ///
    /// assert_eq!(LineStream::with_tab_size("\t  x", 4).indentation(), 6);
    /// assert_eq!(LineStream::new("x").indentation(), 0);
    /// ```
    pub fn indentation(&self) -> usize {
        let mut width = 0;
        for c in self.line.chars() {
            match c {
                '\t' => width += self.tab_size - width % self.tab_size,
                c if crate::symbol::is_space(c) => width += 1,
                _ => break,
            }
        }
        width
    }
}
