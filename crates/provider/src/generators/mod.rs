//! Individual value generators backing the built-in provider.
//!
//! Each module holds free functions taking an RNG, in the style of the
//! corpus-free generators (`numeric`, `pattern`) plus the small embedded
//! corpora behind the namespaced paths (`name`, `address`, ...).

pub mod address;
pub mod company;
pub mod date;
pub mod internet;
pub mod lorem;
pub mod name;
pub mod numeric;
pub mod pattern;

use rand::Rng;

/// Pick one entry from a static word pool.
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool[rng.random_range(0..pool.len())]
}
