//! Row generator: evaluates compiled plans into rows and lines.

use crate::cache::PlanCache;
use crate::error::RowGenError;
use crate::spec::RowSpec;
use datagen_provider::{Value, ValueProvider};
use rand::rngs::StdRng;
use std::sync::Arc;

/// Generates rows from a validated spec.
///
/// All field plans are compiled up front in `new`, so the generator is
/// read-only afterwards: row content is a pure function of the row index
/// and the caller's RNG stream, and one generator can be shared across
/// parallel workers.
pub struct RowGenerator {
    spec: RowSpec,
    plans: PlanCache,
    provider: Arc<dyn ValueProvider>,
}

impl RowGenerator {
    /// Validate the spec and compile every field expression.
    ///
    /// Only configuration invariant violations fail here; expressions
    /// that do not resolve become unresolved plans rendering as empty
    /// values.
    pub fn new(spec: RowSpec, provider: Arc<dyn ValueProvider>) -> Result<Self, RowGenError> {
        spec.validate()?;
        let plans = PlanCache::compile(&spec.fields, provider.as_ref());
        Ok(Self {
            spec,
            plans,
            provider,
        })
    }

    /// Evaluate every field for a 1-based row index, in field order.
    pub fn generate_row(&self, index: u64, rng: &mut StdRng) -> Vec<Value> {
        self.spec
            .fields
            .iter()
            .map(|field| self.evaluate_field(field, index, rng))
            .collect()
    }

    /// Render one row as a separator-joined line.
    ///
    /// Values are rendered via `Display` with no quoting or escaping of
    /// separator occurrences inside text values; this is deliberately
    /// not a CSV encoder.
    pub fn generate_line(&self, index: u64, rng: &mut StdRng) -> String {
        let mut line = String::new();
        for (pos, field) in self.spec.fields.iter().enumerate() {
            if pos > 0 {
                line.push_str(&self.spec.separator);
            }
            line.push_str(&self.evaluate_field(field, index, rng).to_string());
        }
        line
    }

    /// The header line, if one is configured: a preformatted line is
    /// returned verbatim, otherwise the header names joined by the
    /// separator.
    pub fn header_line(&self) -> Option<String> {
        if let Some(line) = &self.spec.header_line {
            return Some(line.clone());
        }
        self.spec
            .header
            .as_ref()
            .map(|names| names.join(&self.spec.separator))
    }

    pub fn spec(&self) -> &RowSpec {
        &self.spec
    }

    pub fn field_count(&self) -> usize {
        self.spec.fields.len()
    }

    fn evaluate_field(&self, field: &str, index: u64, rng: &mut StdRng) -> Value {
        match self.plans.get(field) {
            Some(plan) => plan.evaluate(index, rng, self.provider.as_ref()),
            // Fields outside the compiled list cannot occur for a
            // generator built from its own spec.
            None => Value::empty(),
        }
    }
}
