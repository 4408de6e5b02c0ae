//! Field value providers for the datagen CLI.
//!
//! A provider exposes a hierarchical namespace of zero-argument
//! generators (`name.firstName`, `address.city`, ...) plus three
//! parameterized generators: bounded random integers, bounded scaled
//! decimals, and pattern-expanded random strings.
//!
//! The namespace is an explicit registry built once at provider
//! construction, so resolving a path is a table walk performed at field
//! compilation time, never per row. All generators draw from a caller
//! supplied seeded RNG, which keeps runs reproducible.
//!
//! # Example
//!
//! ```rust
//! use datagen_provider::{BuiltinProvider, Value, ValueProvider};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let provider = BuiltinProvider::new();
//! let generator = provider.resolve(&["name", "firstName"]).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let value = generator(&mut rng);
//! assert!(matches!(value, Value::Text(_)));
//! ```

pub mod builtin;
pub mod generators;
pub mod registry;
mod value;

use rand::rngs::StdRng;

pub use builtin::BuiltinProvider;
pub use registry::{GeneratorFn, Namespace};
pub use value::Value;

/// Capability boundary required of a value provider.
///
/// `resolve` and `available_paths` cover the namespaced zero-argument
/// generators; the three `random_*` methods are the parameterized
/// generators invoked at evaluation time by compiled field plans.
pub trait ValueProvider: Send + Sync {
    /// Resolve a dotted path (already split into segments) to a bound
    /// zero-argument generator. `None` means the path does not name a
    /// generator; resolution failures are not errors at this boundary.
    fn resolve(&self, segments: &[&str]) -> Option<GeneratorFn>;

    /// Every dotted path reachable in the namespace. Used only by the
    /// list-fields informational mode, not during generation.
    fn available_paths(&self) -> Vec<String>;

    /// Uniform random integer in `[min, max]` inclusive.
    fn random_long(&self, rng: &mut StdRng, min: i64, max: i64) -> i64;

    /// Uniform random value in `[min, max]` rounded to `scale`
    /// fractional digits.
    fn random_double(&self, rng: &mut StdRng, scale: u8, min: i64, max: i64) -> f64;

    /// Expand a pattern string: `?` becomes a random letter, `#` a
    /// random digit, everything else passes through verbatim.
    fn random_string(&self, rng: &mut StdRng, pattern: &str) -> String;
}
