//! Block comment continuation.
//!
//! Block comments do not nest: the first `*/` closes the comment no matter
//! how many `/*` came before it.

use super::core::Scanner;
use crate::category::Category;

impl Scanner<'_, '_> {
    /// Consumes up to and including `*/`, or to the end of the line.
    ///
    /// The `*` lookback starts fresh on every call, so a `*` ending one line
    /// and a `/` starting the next do not close the comment.
    pub(super) fn comment(&mut self) -> Option<Category> {
        let mut maybe_end = false;
        while let Some(c) = self.stream.advance() {
            if c == '/' && maybe_end {
                self.close_continuation();
                break;
            }
            maybe_end = c == '*';
        }
        Some(Category::Comment)
    }
}
