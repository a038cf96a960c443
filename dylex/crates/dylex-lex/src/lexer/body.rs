//! Body classifier.
//!
//! Once the header block is closed, every token request lands here unless a
//! string or comment continuation is installed. The classifier peeks at the
//! leading character and either classifies a complete lexeme in one call or
//! installs a continuation that carries on until its construct closes.

use super::core::{Scanner, Tokenizer};
use crate::category::Category;
use crate::symbol::{is_hash_symbol_char, is_symbol_char};

impl Scanner<'_, '_> {
    /// Classifies one lexeme of program text.
    ///
    /// Priority order: quotes, slash forms, decimal numbers, hash literals,
    /// `define`, symbols, then a single unclassified character.
    pub(super) fn body(&mut self) -> Option<Category> {
        match self.stream.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.stream.advance();
                self.chain(Tokenizer::String {
                    quote,
                    category: Category::String,
                })
            },
            Some('/') => self.slash(),
            Some(c) if c.is_ascii_digit() => {
                self.decimal();
                Some(Category::Number)
            },
            Some('#') => self.hash(),
            _ => self.word(),
        }
    }

    /// `/*` opens a block comment, `//` comments out the rest of the line,
    /// anything else is an operator running up to the next space.
    fn slash(&mut self) -> Option<Category> {
        self.stream.advance();
        if self.stream.eat('*') {
            return self.chain(Tokenizer::Comment);
        }
        if self.stream.eat('/') {
            self.stream.skip_to_end();
            return Some(Category::Comment);
        }
        self.stream.skip_to(' ');
        Some(Category::Operator)
    }

    /// Hash literals: `#"symbol"`, `#b1010`, `#xFF`, `#o17`, `#t`, `#key`.
    fn hash(&mut self) -> Option<Category> {
        self.stream.advance();
        match self.stream.peek() {
            Some('"') => {
                self.stream.advance();
                self.chain(Tokenizer::String {
                    quote: '"',
                    category: Category::Atom,
                })
            },
            Some('b') => {
                self.stream.advance();
                self.radix_digits(2);
                Some(Category::Number)
            },
            Some('x') => {
                self.stream.advance();
                self.radix_digits(16);
                Some(Category::Number)
            },
            Some('o') => {
                self.stream.advance();
                self.radix_digits(8);
                Some(Category::Number)
            },
            _ => {
                self.stream.eat_while(is_hash_symbol_char);
                Some(Category::Atom)
            },
        }
    }

    /// `define`, then any other symbol, then one unclassified character.
    fn word(&mut self) -> Option<Category> {
        if self.stream.match_keyword("define") {
            return Some(Category::Def);
        }
        if self.stream.eat_while(is_symbol_char) {
            return Some(Category::Variable);
        }
        self.stream.advance();
        None
    }
}
