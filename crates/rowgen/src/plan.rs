//! Compiled field plans.
//!
//! A field expression string is compiled exactly once into a `FieldPlan`,
//! a reusable descriptor that can be evaluated for any row index without
//! re-parsing or re-resolving. Compilation never fails: any expression
//! that cannot be recognized or resolved yields `Unresolved`, which
//! renders as an empty value for every row.

use datagen_provider::{GeneratorFn, Value, ValueProvider};
use rand::rngs::StdRng;
use std::fmt;

/// The compiled form of one field expression.
#[derive(Clone)]
pub enum FieldPlan {
    /// The literal `rowNumber` expression: evaluates to the 1-based row index.
    RowNumber,
    /// `sequence(start:increment)`: arithmetic progression over the row index.
    Sequence { start: i64, increment: i64 },
    /// `randomString(pattern)`: provider-expanded placeholder pattern.
    RandomString { pattern: String },
    /// `randomLong(min:max)`: uniform integer in `[min, max]`.
    RandomLong { min: i64, max: i64 },
    /// `randomDouble(scale:min:max)`: uniform decimal rendered to `scale` digits.
    RandomDouble { scale: u8, min: i64, max: i64 },
    /// A dotted capability path, resolved once to a bound generator.
    Call(GeneratorFn),
    /// Compilation failed; evaluates to an empty value, never an error.
    Unresolved,
}

/// Strip `name(...)` call syntax, returning the argument body.
fn call_body<'a>(expression: &'a str, name: &str) -> Option<&'a str> {
    expression
        .strip_prefix(name)?
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_long_pair(body: &str) -> Option<(i64, i64)> {
    let (a, b) = body.split_once(':')?;
    Some((a.parse().ok()?, b.parse().ok()?))
}

impl FieldPlan {
    /// Compile one field expression against a provider.
    ///
    /// Recognition is lexical and ordered: the function-call forms are
    /// tried first, then the `rowNumber` literal, and anything else is
    /// treated as a dotted capability path. Path resolution happens here,
    /// once; evaluation only invokes the bound generator.
    pub fn compile(expression: &str, provider: &dyn ValueProvider) -> FieldPlan {
        if let Some(pattern) = call_body(expression, "randomString") {
            return FieldPlan::RandomString {
                pattern: pattern.to_string(),
            };
        }

        if let Some(body) = call_body(expression, "randomLong") {
            return match parse_long_pair(body) {
                Some((min, max)) if min <= max => FieldPlan::RandomLong { min, max },
                _ => FieldPlan::Unresolved,
            };
        }

        if let Some(body) = call_body(expression, "randomDouble") {
            let mut parts = body.splitn(3, ':');
            let parsed = (|| {
                let scale: u8 = parts.next()?.parse().ok()?;
                let min: i64 = parts.next()?.parse().ok()?;
                let max: i64 = parts.next()?.parse().ok()?;
                Some((scale, min, max))
            })();
            return match parsed {
                Some((scale, min, max)) if min <= max => {
                    FieldPlan::RandomDouble { scale, min, max }
                }
                _ => FieldPlan::Unresolved,
            };
        }

        if let Some(body) = call_body(expression, "sequence") {
            return match parse_long_pair(body) {
                Some((start, increment)) => FieldPlan::Sequence { start, increment },
                None => FieldPlan::Unresolved,
            };
        }

        if expression == "rowNumber" {
            return FieldPlan::RowNumber;
        }

        let segments: Vec<&str> = expression.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return FieldPlan::Unresolved;
        }
        match provider.resolve(&segments) {
            Some(generator) => FieldPlan::Call(generator),
            None => FieldPlan::Unresolved,
        }
    }

    /// Evaluate the plan for a 1-based row index.
    pub fn evaluate(&self, index: u64, rng: &mut StdRng, provider: &dyn ValueProvider) -> Value {
        match self {
            FieldPlan::RowNumber => Value::Long(index as i64),
            FieldPlan::Sequence { start, increment } => {
                Value::Long(start + (index as i64 - 1) * increment)
            }
            FieldPlan::RandomLong { min, max } => {
                Value::Long(provider.random_long(rng, *min, *max))
            }
            FieldPlan::RandomDouble { scale, min, max } => Value::Double {
                value: provider.random_double(rng, *scale, *min, *max),
                scale: *scale,
            },
            FieldPlan::RandomString { pattern } => {
                Value::Text(provider.random_string(rng, pattern))
            }
            FieldPlan::Call(generator) => generator(rng),
            FieldPlan::Unresolved => Value::empty(),
        }
    }

    /// Whether compilation failed for this plan.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, FieldPlan::Unresolved)
    }
}

impl fmt::Debug for FieldPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPlan::RowNumber => f.write_str("RowNumber"),
            FieldPlan::Sequence { start, increment } => f
                .debug_struct("Sequence")
                .field("start", start)
                .field("increment", increment)
                .finish(),
            FieldPlan::RandomString { pattern } => f
                .debug_struct("RandomString")
                .field("pattern", pattern)
                .finish(),
            FieldPlan::RandomLong { min, max } => f
                .debug_struct("RandomLong")
                .field("min", min)
                .field("max", max)
                .finish(),
            FieldPlan::RandomDouble { scale, min, max } => f
                .debug_struct("RandomDouble")
                .field("scale", scale)
                .field("min", min)
                .field("max", max)
                .finish(),
            FieldPlan::Call(_) => f.write_str("Call(..)"),
            FieldPlan::Unresolved => f.write_str("Unresolved"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datagen_provider::BuiltinProvider;
    use rand::SeedableRng;

    fn provider() -> BuiltinProvider {
        BuiltinProvider::new()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_compile_row_number() {
        let p = provider();
        let plan = FieldPlan::compile("rowNumber", &p);
        assert!(matches!(plan, FieldPlan::RowNumber));
    }

    #[test]
    fn test_row_number_evaluates_to_index() {
        let p = provider();
        let mut rng = rng();
        let plan = FieldPlan::compile("rowNumber", &p);

        for index in [1u64, 2, 100, 99999] {
            assert_eq!(plan.evaluate(index, &mut rng, &p), Value::Long(index as i64));
        }
    }

    #[test]
    fn test_sequence_arithmetic() {
        let p = provider();
        let mut rng = rng();
        let plan = FieldPlan::compile("sequence(10:3)", &p);

        // start + (index - 1) * increment
        assert_eq!(plan.evaluate(1, &mut rng, &p), Value::Long(10));
        assert_eq!(plan.evaluate(2, &mut rng, &p), Value::Long(13));
        assert_eq!(plan.evaluate(5, &mut rng, &p), Value::Long(22));
    }

    #[test]
    fn test_sequence_negative_increment() {
        let p = provider();
        let mut rng = rng();
        let plan = FieldPlan::compile("sequence(0:-2)", &p);

        assert_eq!(plan.evaluate(3, &mut rng, &p), Value::Long(-4));
    }

    #[test]
    fn test_random_long_bounds() {
        let p = provider();
        let mut rng = rng();
        let plan = FieldPlan::compile("randomLong(1:10)", &p);

        for index in 0..1000 {
            match plan.evaluate(index, &mut rng, &p) {
                Value::Long(v) => assert!((1..=10).contains(&v)),
                other => panic!("expected long, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_random_double_bounds_and_scale() {
        let p = provider();
        let mut rng = rng();
        let plan = FieldPlan::compile("randomDouble(2:5:100)", &p);

        for index in 0..1000 {
            let value = plan.evaluate(index, &mut rng, &p);
            let Value::Double { value: v, scale } = value else {
                panic!("expected double");
            };
            assert_eq!(scale, 2);
            assert!((5.0..=100.0).contains(&v));

            // Rendered form has at most `scale` fractional digits.
            let rendered = Value::Double { value: v, scale }.to_string();
            let fraction = rendered.split('.').nth(1).unwrap_or("");
            assert!(fraction.len() <= 2);
        }
    }

    #[test]
    fn test_random_string_expansion() {
        let p = provider();
        let mut rng = rng();
        let plan = FieldPlan::compile("randomString(ID-?#?#)", &p);

        for index in 0..100 {
            let Value::Text(s) = plan.evaluate(index, &mut rng, &p) else {
                panic!("expected text");
            };
            assert_eq!(s.len(), 7);
            assert_eq!(&s[..3], "ID-");
            let chars: Vec<char> = s.chars().collect();
            assert!(chars[3].is_ascii_alphabetic());
            assert!(chars[4].is_ascii_digit());
        }
    }

    #[test]
    fn test_compile_provider_call() {
        let p = provider();
        let mut rng = rng();
        let plan = FieldPlan::compile("name.firstName", &p);

        assert!(matches!(plan, FieldPlan::Call(_)));
        let Value::Text(s) = plan.evaluate(1, &mut rng, &p) else {
            panic!("expected text");
        };
        assert!(!s.is_empty());
    }

    #[test]
    fn test_unknown_path_is_unresolved() {
        let p = provider();
        let plan = FieldPlan::compile("name.doesNotExist", &p);
        assert!(plan.is_unresolved());
    }

    #[test]
    fn test_malformed_calls_are_unresolved() {
        let p = provider();
        assert!(FieldPlan::compile("randomLong(1)", &p).is_unresolved());
        assert!(FieldPlan::compile("randomLong(a:b)", &p).is_unresolved());
        assert!(FieldPlan::compile("randomLong(10:1)", &p).is_unresolved());
        assert!(FieldPlan::compile("randomDouble(2:1)", &p).is_unresolved());
        assert!(FieldPlan::compile("sequence(1)", &p).is_unresolved());
        assert!(FieldPlan::compile("a..b", &p).is_unresolved());
        assert!(FieldPlan::compile("", &p).is_unresolved());
    }

    #[test]
    fn test_unresolved_evaluates_to_empty_text() {
        let p = provider();
        let mut rng = rng();
        let plan = FieldPlan::compile("no.such.path", &p);

        assert_eq!(plan.evaluate(1, &mut rng, &p), Value::empty());
        assert_eq!(plan.evaluate(500, &mut rng, &p), Value::empty());
    }

    #[test]
    fn test_random_string_pattern_kept_verbatim() {
        let p = provider();
        let plan = FieldPlan::compile("randomString(a:b.c)", &p);
        match plan {
            FieldPlan::RandomString { pattern } => assert_eq!(pattern, "a:b.c"),
            other => panic!("expected RandomString, got {other:?}"),
        }
    }
}
