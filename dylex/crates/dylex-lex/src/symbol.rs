//! Character classes for Dylan lexemes.
//!
//! Also home to [`symbol_shape`], which recognizes the conventional Dylan
//! naming forms (`keyword:`, `<class>`, `*global*`, `$constant`). The body
//! classifier does not consult it: all of those forms are colored as plain
//! variables. It is exposed for hosts that want finer-grained coloring on top
//! of the analyzer's output.

/// Checks if a character belongs to the Dylan symbol grammar
/// `[-_a-zA-Z?!*@<>$%]`.
///
/// Digits are not symbol characters, so a lexeme starting with a digit is
/// always lexed as a number.
///
/// ```
/// use dylex_lex::symbol::is_symbol_char;
///
/// assert!(is_symbol_char('a'));
/// assert!(is_symbol_char('<'));
/// assert!(is_symbol_char('-'));
/// assert!(!is_symbol_char('1'));
/// assert!(!is_symbol_char(':'));
/// ```
#[inline]
pub fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c, '-' | '_' | '?' | '!' | '*' | '@' | '<' | '>' | '$' | '%')
}

/// Word character as used by header keywords: `[A-Za-z0-9_]`.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters allowed after a `#` in a hash symbol such as `#t` or `#all-keys`.
#[inline]
pub fn is_hash_symbol_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-'
}

/// Whitespace skipped before every token, including no-break space.
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{a0}'
}

/// Length of the longest prefix of `text` made of symbol characters.
pub fn symbol_len(text: &str) -> usize {
    text.find(|c: char| !is_symbol_char(c)).unwrap_or(text.len())
}

/// Length of a header keyword (`Module:`, `Author:`, ...) at the start of
/// `text`, colon included.
///
/// A keyword is a word character, then any number of word characters or
/// hyphens, then a colon.
///
/// ```
/// use dylex_lex::symbol::header_keyword_len;
///
/// assert_eq!(header_keyword_len("Module: dylan-user"), Some(7));
/// assert_eq!(header_keyword_len("copy-right: none"), Some(11));
/// assert_eq!(header_keyword_len("-bad: x"), None);
/// assert_eq!(header_keyword_len("no colon here"), None);
/// ```
pub fn header_keyword_len(text: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, c)) if is_word_char(c) => {},
        _ => return None,
    }
    for (i, c) in chars {
        match c {
            ':' => return Some(i + 1),
            c if is_word_char(c) || c == '-' => {},
            _ => return None,
        }
    }
    None
}

/// Conventional Dylan naming forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolShape {
    /// `name:` keyword argument or slot keyword
    Keyword,
    /// `<name>` class name
    Class,
    /// `*name*` module variable
    Global,
    /// `$name` constant
    Constant,
}

/// Recognizes a special symbol form at the start of `text`.
///
/// Returns the shape and the byte length of the match. Forms are tried in the
/// order class, global, constant, keyword.
///
/// ```
/// use dylex_lex::{symbol_shape, SymbolShape};
///
/// assert_eq!(symbol_shape("<string> x"), Some((SymbolShape::Class, 8)));
/// assert_eq!(symbol_shape("*debug*"), Some((SymbolShape::Global, 7)));
/// assert_eq!(symbol_shape("$pi"), Some((SymbolShape::Constant, 3)));
/// assert_eq!(symbol_shape("size: 3"), Some((SymbolShape::Keyword, 5)));
/// assert_eq!(symbol_shape("plain"), None);
/// ```
pub fn symbol_shape(text: &str) -> Option<(SymbolShape, usize)> {
    if let Some(rest) = text.strip_prefix('<') {
        if let Some(len) = closed_run_len(rest, '>') {
            return Some((SymbolShape::Class, len + 1));
        }
    }
    if let Some(rest) = text.strip_prefix('*') {
        if let Some(len) = closed_run_len(rest, '*') {
            return Some((SymbolShape::Global, len + 1));
        }
    }
    if let Some(rest) = text.strip_prefix('$') {
        let len = symbol_len(rest);
        if len > 0 {
            return Some((SymbolShape::Constant, len + 1));
        }
    }
    let len = symbol_len(text);
    if len > 0 && text[len..].starts_with(':') {
        return Some((SymbolShape::Keyword, len + 1));
    }
    None
}

/// For `S+ close` where `close` is itself a symbol character: the longest
/// match ends at the last `close` in the symbol run that has at least one
/// character before it. Returns the length including the closing character.
fn closed_run_len(text: &str, close: char) -> Option<usize> {
    let run = &text[..symbol_len(text)];
    run.char_indices()
        .skip(1)
        .filter(|&(_, c)| c == close)
        .last()
        .map(|(i, c)| i + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_len() {
        assert_eq!(symbol_len("make-instance(x)"), 13);
        assert_eq!(symbol_len("42"), 0);
        assert_eq!(symbol_len("empty?"), 6);
        assert_eq!(symbol_len(""), 0);
    }

    #[test]
    fn test_header_keyword_allows_digits_and_hyphens() {
        assert_eq!(header_keyword_len("x1-y_2: v"), Some(7));
        assert_eq!(header_keyword_len("1st:"), Some(4));
        assert_eq!(header_keyword_len(": nothing"), None);
        assert_eq!(header_keyword_len(" Module: x"), None);
    }

    #[test]
    fn test_class_shape_backtracks_to_last_close() {
        // '>' is itself a symbol character, so the run swallows it.
        assert_eq!(symbol_shape("<foo>"), Some((SymbolShape::Class, 5)));
        assert_eq!(symbol_shape("<a>b>"), Some((SymbolShape::Class, 5)));
        assert_eq!(symbol_shape("<>"), None);
        assert_eq!(symbol_shape("<>>"), Some((SymbolShape::Class, 3)));
    }

    #[test]
    fn test_global_shape() {
        assert_eq!(symbol_shape("*x*"), Some((SymbolShape::Global, 3)));
        assert_eq!(symbol_shape("**"), None);
    }

    #[test]
    fn test_keyword_requires_colon_after_run() {
        assert_eq!(symbol_shape("key: 1"), Some((SymbolShape::Keyword, 4)));
        assert_eq!(symbol_shape("key :"), None);
    }

    #[test]
    fn test_space_includes_nbsp() {
        assert!(is_space(' '));
        assert!(is_space('\t'));
        assert!(is_space('\u{a0}'));
        assert!(!is_space('x'));
    }
}
