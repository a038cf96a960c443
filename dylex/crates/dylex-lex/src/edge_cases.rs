//! Edge case tests for dylex-lex
