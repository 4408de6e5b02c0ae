//! Hierarchical generator registry.
//!
//! The registry is an explicit table mapping dotted capability paths to
//! zero-argument generator functions. It is built once at provider
//! construction time and only read afterwards, so resolved generators
//! can be shared freely across parallel workers.

use crate::Value;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A zero-argument generator bound at resolution time.
///
/// Invoking the generator per row is the only per-row cost; the path
/// walk that found it happens exactly once, when a field expression is
/// compiled.
pub type GeneratorFn = Arc<dyn Fn(&mut StdRng) -> Value + Send + Sync>;

/// One level of the capability namespace: named generator leaves plus
/// named sub-namespaces.
#[derive(Default)]
pub struct Namespace {
    entries: BTreeMap<&'static str, Entry>,
}

enum Entry {
    Group(Namespace),
    Generator(GeneratorFn),
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sub-namespace under `name`.
    pub fn group(mut self, name: &'static str, namespace: Namespace) -> Self {
        self.entries.insert(name, Entry::Group(namespace));
        self
    }

    /// Add a generator leaf under `name`.
    pub fn generator<F>(mut self, name: &'static str, f: F) -> Self
    where
        F: Fn(&mut StdRng) -> Value + Send + Sync + 'static,
    {
        self.entries.insert(name, Entry::Generator(Arc::new(f)));
        self
    }

    /// Resolve a dotted path split into segments: every leading segment
    /// must name a sub-namespace, the final segment a generator leaf.
    pub fn resolve(&self, segments: &[&str]) -> Option<GeneratorFn> {
        match segments {
            [] => None,
            [leaf] => match self.entries.get(*leaf)? {
                Entry::Generator(generator) => Some(generator.clone()),
                Entry::Group(_) => None,
            },
            [head, rest @ ..] => match self.entries.get(*head)? {
                Entry::Group(namespace) => namespace.resolve(rest),
                Entry::Generator(_) => None,
            },
        }
    }

    /// Every dotted path that reaches a generator leaf, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_paths("", &mut out);
        out
    }

    fn collect_paths(&self, prefix: &str, out: &mut Vec<String>) {
        for (name, entry) in &self.entries {
            let path = if prefix.is_empty() {
                (*name).to_string()
            } else {
                format!("{prefix}.{name}")
            };
            match entry {
                Entry::Generator(_) => out.push(path),
                Entry::Group(namespace) => namespace.collect_paths(&path, out),
            }
        }
    }
}
