//! Filler text generators.

use super::pick;
use rand::Rng;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
    "tempor", "incididunt", "labore", "dolore", "magna", "aliqua", "veniam", "quis", "nostrud",
];

pub fn word<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, WORDS).to_string()
}

/// A 5-10 word sentence with a capitalized first word and trailing period.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.random_range(5..=10);
    let words: Vec<&str> = (0..len).map(|_| pick(rng, WORDS)).collect();

    let mut s = words.join(" ");
    if let Some(first) = s.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    s.push('.');
    s
}
