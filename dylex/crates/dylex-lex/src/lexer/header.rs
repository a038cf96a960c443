//! Header block tokenizer.
//!
//! A Dylan file may open with `Keyword: value` lines. A keyword starts a
//! line with no leading whitespace; anything else on a header line is
//! colored as a value, one character per call.

use super::core::Scanner;
use crate::category::Category;
use crate::symbol::header_keyword_len;

impl Scanner<'_, '_> {
    /// Tokenizes header text.
    ///
    /// At the start of a line, `Keyword:` is consumed together with the
    /// character that follows it and reported as
    /// [`Category::HeaderKeyword`]. Every other call consumes one character
    /// and reports [`Category::HeaderValue`].
    pub(super) fn header(&mut self) -> Option<Category> {
        if self.stream.sol() && self.stream.match_with(header_keyword_len) {
            self.stream.advance();
            return Some(Category::HeaderKeyword);
        }
        self.stream.advance();
        Some(Category::HeaderValue)
    }
}
