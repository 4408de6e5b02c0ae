//! Field expression compiler and row generation engine.
//!
//! Each field expression string is compiled once into a [`FieldPlan`]
//! and memoized in a [`PlanCache`]; the [`RowGenerator`] evaluates the
//! cached plans for arbitrary 1-based row indices, producing typed rows
//! or rendered delimited lines.
//!
//! # Architecture
//!
//! ```text
//! field expressions (strings)
//!          │
//!          ▼  compile once, per distinct string
//! ┌──────────────────┐        ┌──────────────────┐
//! │    PlanCache     │───────▶│ ValueProvider    │
//! │  expr → FieldPlan│ resolve│ (capability      │
//! └────────┬─────────┘        │  registry)       │
//!          │ evaluate(index)  └──────────────────┘
//!          ▼
//! RowGenerator ──▶ Vec<Value> / delimited line
//! ```
//!
//! # Example
//!
//! ```rust
//! use datagen_rowgen::{RowGenerator, RowSpec};
//! use datagen_provider::BuiltinProvider;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use std::sync::Arc;
//!
//! let spec = RowSpec::new(vec![
//!     "rowNumber".to_string(),
//!     "sequence(100:5)".to_string(),
//! ])
//! .with_separator(";");
//!
//! let rowgen = RowGenerator::new(spec, Arc::new(BuiltinProvider::new())).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! assert_eq!(rowgen.generate_line(2, &mut rng), "2;105");
//! ```

pub mod cache;
pub mod error;
pub mod plan;
pub mod row;
pub mod spec;

pub use cache::PlanCache;
pub use error::RowGenError;
pub use plan::FieldPlan;
pub use row::RowGenerator;
pub use spec::RowSpec;

// Re-export the provider boundary types used in this crate's API.
pub use datagen_provider::{Value, ValueProvider};
