//! Built-in provider backed by small embedded corpora.

use crate::generators::{address, company, date, internet, lorem, name, numeric, pattern};
use crate::registry::{GeneratorFn, Namespace};
use crate::{Value, ValueProvider};
use rand::rngs::StdRng;

/// The default value provider.
///
/// Exposes a two-level capability namespace (`name.firstName`,
/// `address.city`, ...) built as an explicit registry at construction
/// time, plus the three parameterized generators.
pub struct BuiltinProvider {
    registry: Namespace,
}

impl BuiltinProvider {
    pub fn new() -> Self {
        let registry = Namespace::new()
            .group(
                "name",
                Namespace::new()
                    .generator("firstName", |rng| Value::Text(name::first_name(rng)))
                    .generator("lastName", |rng| Value::Text(name::last_name(rng)))
                    .generator("fullName", |rng| Value::Text(name::full_name(rng)))
                    .generator("prefix", |rng| Value::Text(name::prefix(rng))),
            )
            .group(
                "address",
                Namespace::new()
                    .generator("city", |rng| Value::Text(address::city(rng)))
                    .generator("streetName", |rng| Value::Text(address::street_name(rng)))
                    .generator("streetAddress", |rng| {
                        Value::Text(address::street_address(rng))
                    })
                    .generator("zipCode", |rng| Value::Text(address::zip_code(rng)))
                    .generator("state", |rng| Value::Text(address::state(rng)))
                    .generator("country", |rng| Value::Text(address::country(rng))),
            )
            .group(
                "internet",
                Namespace::new()
                    .generator("email", |rng| Value::Text(internet::email(rng)))
                    .generator("userName", |rng| Value::Text(internet::user_name(rng)))
                    .generator("domainName", |rng| Value::Text(internet::domain_name(rng)))
                    .generator("ipV4", |rng| Value::Text(internet::ipv4(rng)))
                    .generator("uuid", |rng| Value::Text(internet::uuid_v4(rng))),
            )
            .group(
                "company",
                Namespace::new()
                    .generator("name", |rng| Value::Text(company::name(rng)))
                    .generator("industry", |rng| Value::Text(company::industry(rng)))
                    .generator("buzzword", |rng| Value::Text(company::buzzword(rng))),
            )
            .group(
                "lorem",
                Namespace::new()
                    .generator("word", |rng| Value::Text(lorem::word(rng)))
                    .generator("sentence", |rng| Value::Text(lorem::sentence(rng))),
            )
            .group(
                "date",
                Namespace::new()
                    .generator("iso8601", |rng| Value::Text(date::iso8601(rng)))
                    .generator("date", |rng| Value::Text(date::date(rng)))
                    .generator("unixTimestamp", |rng| {
                        Value::Long(date::unix_timestamp(rng))
                    }),
            );

        Self { registry }
    }
}

impl Default for BuiltinProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueProvider for BuiltinProvider {
    fn resolve(&self, segments: &[&str]) -> Option<GeneratorFn> {
        self.registry.resolve(segments)
    }

    fn available_paths(&self) -> Vec<String> {
        self.registry.paths()
    }

    fn random_long(&self, rng: &mut StdRng, min: i64, max: i64) -> i64 {
        numeric::random_long(rng, min, max)
    }

    fn random_double(&self, rng: &mut StdRng, scale: u8, min: i64, max: i64) -> f64 {
        numeric::random_double(rng, scale, min, max)
    }

    fn random_string(&self, rng: &mut StdRng, pattern: &str) -> String {
        pattern::expand_pattern(rng, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_resolve_known_path() {
        let provider = BuiltinProvider::new();
        let generator = provider.resolve(&["name", "firstName"]).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        match generator(&mut rng) {
            Value::Text(s) => assert!(!s.is_empty()),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_unknown_path() {
        let provider = BuiltinProvider::new();
        assert!(provider.resolve(&["name", "nope"]).is_none());
        assert!(provider.resolve(&["nope"]).is_none());
    }

    #[test]
    fn test_available_paths_include_known_fields() {
        let provider = BuiltinProvider::new();
        let paths = provider.available_paths();

        assert!(paths.contains(&"name.firstName".to_string()));
        assert!(paths.contains(&"address.city".to_string()));
        assert!(paths.contains(&"internet.email".to_string()));
        assert!(paths.contains(&"date.unixTimestamp".to_string()));
    }

    #[test]
    fn test_typed_values() {
        let provider = BuiltinProvider::new();
        let mut rng = StdRng::seed_from_u64(42);

        let generator = provider.resolve(&["date", "unixTimestamp"]).unwrap();
        assert!(matches!(generator(&mut rng), Value::Long(_)));
    }
}
