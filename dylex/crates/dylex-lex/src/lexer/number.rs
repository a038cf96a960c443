//! Number literal scanning.
//!
//! Numbers are only measured, never evaluated: the classifier needs the
//! extent of the literal, not its value.

use super::core::Scanner;

impl Scanner<'_, '_> {
    /// Consumes a decimal literal `digits [. digits] [(e|E) [+|-] digits]`.
    ///
    /// The fraction digits are optional (`1.` is one literal). The exponent is
    /// only consumed when at least one digit follows the marker and optional
    /// sign, so `2e` lexes as `2` followed by a symbol.
    pub(super) fn decimal(&mut self) {
        self.stream.eat_while(|c| c.is_ascii_digit());
        if self.stream.eat('.') {
            self.stream.eat_while(|c| c.is_ascii_digit());
        }
        let exponent = exponent_len(self.stream.remaining());
        self.stream.advance_bytes(exponent);
    }

    /// Consumes digits valid in `radix` (2, 8 or 16), any case for hex.
    pub(super) fn radix_digits(&mut self, radix: u32) {
        self.stream.eat_while(|c| c.is_digit(radix));
    }
}

/// Length of an exponent suffix (`e10`, `E-3`) at the start of `text`, or 0.
fn exponent_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let mut len = 1;
    if matches!(bytes.get(1), Some(b'+' | b'-')) {
        len += 1;
    }
    let digits = bytes[len..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        0
    } else {
        len + digits
    }
}
