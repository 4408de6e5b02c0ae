//! Plan cache: one compiled plan per distinct field expression.

use crate::plan::FieldPlan;
use datagen_provider::ValueProvider;
use std::collections::HashMap;

/// Memoized field plans, keyed by the exact expression string.
///
/// The cache is populated once from the full field list before bulk
/// generation begins and is read-only afterwards, so it can be shared
/// across parallel workers without locking.
pub struct PlanCache {
    plans: HashMap<String, FieldPlan>,
}

impl PlanCache {
    /// Compile every distinct expression in `fields`. Resolution is
    /// attempted at most once per distinct string; failures are cached
    /// as unresolved plans.
    pub fn compile(fields: &[String], provider: &dyn ValueProvider) -> Self {
        let mut plans = HashMap::with_capacity(fields.len());
        for field in fields {
            plans
                .entry(field.clone())
                .or_insert_with(|| FieldPlan::compile(field, provider));
        }
        Self { plans }
    }

    /// Look up the plan for an expression that was part of the compiled
    /// field list.
    pub fn get(&self, expression: &str) -> Option<&FieldPlan> {
        self.plans.get(expression)
    }

    /// Number of distinct compiled expressions.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
