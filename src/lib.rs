//! Datagen Library
//!
//! A library for generating synthetic delimited-text and typed-record
//! data from field expressions.
//!
//! # Features
//!
//! - Field expression compilation: each field specifier is compiled
//!   once into a reusable plan, resolved against a value provider
//! - Volume targets: exact row counts or estimated megabyte budgets
//! - Parallel generation: row production fans out across worker tasks
//!   while sink writes stay serialized
//! - Pacing: an optional per-row delay for simulating streaming sources
//! - Deterministic runs: seeded RNGs make output reproducible
//!
//! # Crates
//!
//! - `datagen-rowgen` - field expression compiler and row generator
//! - `datagen-provider` - namespaced value providers
//!
//! # CLI Usage
//!
//! ```bash
//! # 1000 semicolon-separated rows to stdout
//! datagen generate --fields "rowNumber,name.fullName,randomLong(1:100)" \
//!   --separator ";" --rows 1000
//!
//! # Roughly 100 MB to a file, generated by 4 workers
//! datagen generate --fields "internet.email,randomDouble(2:0:500)" \
//!   --mbs 100 --output data.txt --workers 4
//!
//! # List every supported field expression
//! datagen list-fields
//! ```

pub mod config;
pub mod estimate;
pub mod record;
pub mod run;
pub mod sink;

// Re-export the member crates for convenience
pub use datagen_provider as provider;
pub use datagen_rowgen as rowgen;
