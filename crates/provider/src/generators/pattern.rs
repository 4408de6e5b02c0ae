//! Pattern-based random string generator.
//!
//! Supports two placeholder markers:
//! - `?` - a random lowercase letter
//! - `#` - a random digit
//!
//! Every other character is passed through verbatim at its position.

use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

/// Expand a pattern, replacing each placeholder with a random character
/// of its class. The result always has the same character count as the
/// pattern.
pub fn expand_pattern<R: Rng + ?Sized>(rng: &mut R, pattern: &str) -> String {
    let mut result = String::with_capacity(pattern.len());

    for c in pattern.chars() {
        match c {
            '?' => result.push(LETTERS[rng.random_range(0..LETTERS.len())] as char),
            '#' => result.push(DIGITS[rng.random_range(0..DIGITS.len())] as char),
            other => result.push(other),
        }
    }

    result
}
