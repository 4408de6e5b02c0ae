//! Company-flavored value generators.

use super::pick;
use rand::Rng;

const COMPANY_STEMS: &[&str] = &[
    "Nova", "Vertex", "Quanta", "Orion", "Helix", "Atlas", "Zephyr", "Lumen",
];

const COMPANY_SUFFIXES: &[&str] = &["Labs", "Systems", "Group", "Holdings", "Partners", "Works"];

const INDUSTRIES: &[&str] = &[
    "Logistics", "Insurance", "Retail", "Energy", "Telecom", "Manufacturing", "Healthcare",
    "Finance",
];

const BUZZWORDS: &[&str] = &[
    "synergy", "scalability", "throughput", "resilience", "alignment", "velocity",
];

pub fn name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, COMPANY_STEMS), pick(rng, COMPANY_SUFFIXES))
}

pub fn industry<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, INDUSTRIES).to_string()
}

pub fn buzzword<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, BUZZWORDS).to_string()
}
