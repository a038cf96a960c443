//! Span module - line-relative source ranges.
//!
//! The analyzer is fed one line at a time, so a classified token is located by
//! its line number plus a byte range inside that line rather than by a file
//! offset.
//!
//! ```
//! use dylex_util::span::Span;
//!
//! let span = Span::new(3, 4, 10);
//! assert_eq!(span.len(), 6);
//! assert_eq!(span.slice("    define method"), Some("define"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SpanError, SpanResult};

/// Byte range `start..end` inside line `line` (1-based).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Line number (1-based)
    pub line: u32,
    /// Start byte offset in the line
    pub start: usize,
    /// End byte offset in the line (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span. `start` must not exceed `end`.
    #[inline]
    pub const fn new(line: u32, start: usize, end: usize) -> Self {
        Self { line, start, end }
    }

    /// Checked constructor for ranges coming from outside the analyzer.
    pub fn try_new(line: u32, start: usize, end: usize) -> SpanResult<Self> {
        if start > end {
            return Err(SpanError::InvalidSpan { start, end });
        }
        Ok(Self::new(line, start, end))
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check whether a byte offset of the same line falls inside this span
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Join two spans of the same line into the smallest span covering both.
    ///
    /// Returns `None` when the spans sit on different lines.
    pub fn join(self, other: Span) -> Option<Span> {
        (self.line == other.line).then(|| Span {
            line: self.line,
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        })
    }

    /// The text this span covers in `line`, or `None` if it does not fit.
    pub fn slice<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.get(self.start..self.end)
    }

    /// Like [`slice`](Self::slice), with the reason for a failure.
    pub fn try_slice<'a>(&self, line: &'a str) -> SpanResult<&'a str> {
        if self.end > line.len() || self.start > self.end {
            return Err(SpanError::OutOfBounds {
                line_len: line.len(),
                span_start: self.start,
                span_end: self.end,
            });
        }
        line.get(self.start..self.end)
            .ok_or(SpanError::NotCharBoundary {
                start: self.start,
                end: self.end,
            })
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.line, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_rejects_reversed_range() {
        assert_eq!(
            Span::try_new(1, 4, 2),
            Err(SpanError::InvalidSpan { start: 4, end: 2 })
        );
        assert!(Span::try_new(1, 2, 2).unwrap().is_empty());
    }

    #[test]
    fn test_contains() {
        let span = Span::new(1, 2, 5);
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }

    #[test]
    fn test_join() {
        let a = Span::new(2, 0, 3);
        let b = Span::new(2, 5, 8);
        assert_eq!(a.join(b), Some(Span::new(2, 0, 8)));
        assert_eq!(a.join(Span::new(3, 0, 1)), None);
    }

    #[test]
    fn test_try_slice_errors() {
        let line = "héllo";
        assert_eq!(Span::new(1, 0, 1).try_slice(line), Ok("h"));
        assert_eq!(
            Span::new(1, 0, 2).try_slice(line),
            Err(SpanError::NotCharBoundary { start: 0, end: 2 })
        );
        assert!(matches!(
            Span::new(1, 0, 40).try_slice(line),
            Err(SpanError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(7, 1, 4).to_string(), "7:1-4");
    }
}
