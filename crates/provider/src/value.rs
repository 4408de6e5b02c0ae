//! Column value representation shared by providers and the row generator.

use std::fmt;

/// A single generated column value.
///
/// Providers return whatever shape fits the field (an integer, a scaled
/// decimal, or text); the row generator renders every variant through
/// `Display` when assembling a delimited line, and structured-output
/// consumers map variants to column types instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer.
    Long(i64),
    /// Floating-point value rendered with a fixed number of fractional digits.
    Double {
        /// The numeric value.
        value: f64,
        /// Number of fractional digits to render.
        scale: u8,
    },
    /// Text value.
    Text(String),
}

impl Value {
    /// An empty text value, used for unresolvable fields.
    pub fn empty() -> Self {
        Value::Text(String::new())
    }

    /// Convenience constructor for text values.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Long(v) => write!(f, "{v}"),
            Value::Double { value, scale } => write!(f, "{value:.*}", *scale as usize),
            Value::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_display() {
        assert_eq!(Value::Long(-42).to_string(), "-42");
    }

    #[test]
    fn test_double_display_uses_scale() {
        let value = Value::Double {
            value: 13.4567,
            scale: 2,
        };
        assert_eq!(value.to_string(), "13.46");

        let value = Value::Double {
            value: 7.0,
            scale: 3,
        };
        assert_eq!(value.to_string(), "7.000");
    }

    #[test]
    fn test_empty() {
        assert_eq!(Value::empty().to_string(), "");
    }
}
