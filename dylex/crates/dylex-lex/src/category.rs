//! Token categories.
//!
//! A category is pure output: the analyzer returns one per call and never
//! stores it. The null category ("no highlighting") is modelled as `None`
//! wherever an `Option<Category>` is returned.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownCategory;

/// Classification of a lexeme, consumed by a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// `Module:` at the start of a header line
    HeaderKeyword,
    /// Any other header text
    HeaderValue,
    /// Quoted string, possibly spanning lines
    String,
    /// Line or block comment
    Comment,
    /// Decimal or radix-prefixed number
    Number,
    /// Hash literal (`#t`, `#key`) or `#"symbol"`
    Atom,
    /// Slash-led operator such as `/=`
    Operator,
    /// The `define` keyword
    Def,
    /// Any other symbol
    Variable,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 9] = [
        Category::HeaderKeyword,
        Category::HeaderValue,
        Category::String,
        Category::Comment,
        Category::Number,
        Category::Atom,
        Category::Operator,
        Category::Def,
        Category::Variable,
    ];

    /// The category's style name, as used by editor themes.
    ///
    /// ```
    /// use dylex_lex::Category;
    ///
    /// assert_eq!(Category::HeaderKeyword.as_str(), "header-keyword");
    /// assert_eq!(Category::Def.as_str(), "def");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::HeaderKeyword => "header-keyword",
            Category::HeaderValue => "header-value",
            Category::String => "string",
            Category::Comment => "comment",
            Category::Number => "number",
            Category::Atom => "atom",
            Category::Operator => "operator",
            Category::Def => "def",
            Category::Variable => "variable",
        }
    }

    /// Returns true for the two categories emitted in header mode.
    pub const fn is_header(self) -> bool {
        matches!(self, Category::HeaderKeyword | Category::HeaderValue)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "keyword".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown token category: keyword");
    }

    #[test]
    fn test_serde_uses_style_names() {
        let json = serde_json::to_string(&Category::HeaderValue).unwrap();
        assert_eq!(json, "\"header-value\"");
    }

    #[test]
    fn test_is_header() {
        assert!(Category::HeaderKeyword.is_header());
        assert!(!Category::Variable.is_header());
    }
}
