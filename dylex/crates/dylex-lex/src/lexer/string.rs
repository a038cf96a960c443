//! String continuation.
//!
//! Covers both `"..."` / `'...'` strings and `#"..."` symbols. The literal
//! may span lines: the continuation stays installed until the closing quote
//! is seen, and the next call (on this line or a later one) picks the scan
//! up where it stopped.

use super::core::Scanner;
use crate::category::Category;

impl Scanner<'_, '_> {
    /// Consumes up to and including `quote`, or to the end of the line.
    ///
    /// There are no escapes: a backslash is an ordinary character. Reports
    /// `category` whether or not the literal closed on this line.
    pub(super) fn string(&mut self, quote: char, category: Category) -> Option<Category> {
        while let Some(c) = self.stream.advance() {
            if c == quote {
                self.close_continuation();
                break;
            }
        }
        Some(category)
    }
}
