//! Typed-record boundary for structured output consumers.
//!
//! Structured backends (columnar files, partitioned datasets) consume
//! typed rows instead of rendered lines. This module defines the
//! contract the core offers them: column names plus storage types
//! inferred from a single sample row. Because row content typing is
//! consistent across indices for a fixed field list, one sample row is
//! sufficient.

use datagen_rowgen::{RowGenerator, Value};
use rand::rngs::StdRng;

/// Storage type of one output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 64-bit integer column.
    Long,
    /// Floating-point column.
    Double,
    /// String column (also the fallback for empty/unresolved values).
    Text,
}

impl ColumnType {
    /// Map a generated value to its column storage type.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Long(_) => ColumnType::Long,
            Value::Double { .. } => ColumnType::Double,
            Value::Text(_) => ColumnType::Text,
        }
    }
}

/// Name and storage type of one output column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
}

/// Infer the column layout from one sample row (index 1).
///
/// Column names come from the configured header list when present,
/// falling back to positional `colN` names. Sampling consumes RNG
/// state; callers pacing a deterministic run should use a dedicated
/// RNG for inference.
pub fn infer_columns(rowgen: &RowGenerator, rng: &mut StdRng) -> Vec<Column> {
    let sample = rowgen.generate_row(1, rng);
    let header = rowgen.spec().header.as_ref();

    sample
        .iter()
        .enumerate()
        .map(|(pos, value)| Column {
            name: header
                .and_then(|names| names.get(pos))
                .cloned()
                .unwrap_or_else(|| format!("col{pos}")),
            column_type: ColumnType::of(value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use datagen_provider::BuiltinProvider;
    use datagen_rowgen::RowSpec;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn fields(exprs: &[&str]) -> Vec<String> {
        exprs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_infer_types_from_sample_row() {
        let spec = RowSpec::new(fields(&[
            "rowNumber",
            "randomDouble(2:1:9)",
            "name.firstName",
            "no.such.path",
        ]));
        let rowgen = RowGenerator::new(spec, Arc::new(BuiltinProvider::new())).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let columns = infer_columns(&rowgen, &mut rng);
        let types: Vec<ColumnType> = columns.iter().map(|c| c.column_type).collect();
        assert_eq!(
            types,
            vec![
                ColumnType::Long,
                ColumnType::Double,
                ColumnType::Text,
                ColumnType::Text,
            ]
        );
    }

    #[test]
    fn test_column_names_from_header() {
        let spec = RowSpec::new(fields(&["rowNumber", "name.firstName"]))
            .with_header(fields(&["id", "first"]));
        let rowgen = RowGenerator::new(spec, Arc::new(BuiltinProvider::new())).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let columns = infer_columns(&rowgen, &mut rng);
        assert_eq!(columns[0].name, "id");
        assert_eq!(columns[1].name, "first");
    }

    #[test]
    fn test_positional_names_without_header() {
        let spec = RowSpec::new(fields(&["rowNumber", "name.firstName"]));
        let rowgen = RowGenerator::new(spec, Arc::new(BuiltinProvider::new())).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let columns = infer_columns(&rowgen, &mut rng);
        assert_eq!(columns[0].name, "col0");
        assert_eq!(columns[1].name, "col1");
    }

    #[test]
    fn test_typing_consistent_across_rows() {
        let spec = RowSpec::new(fields(&["rowNumber", "randomDouble(3:0:100)"]));
        let rowgen = RowGenerator::new(spec, Arc::new(BuiltinProvider::new())).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let expected: Vec<ColumnType> = rowgen
            .generate_row(1, &mut rng)
            .iter()
            .map(ColumnType::of)
            .collect();
        for index in 2..=50 {
            let types: Vec<ColumnType> = rowgen
                .generate_row(index, &mut rng)
                .iter()
                .map(ColumnType::of)
                .collect();
            assert_eq!(types, expected);
        }
    }
}
