//! Person name generators.

use super::pick;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Carla", "Diego", "Elena", "Felix", "Grace", "Hugo", "Ines", "Jonas",
    "Karin", "Lucas", "Marta", "Nadia", "Oscar", "Paula", "Quentin", "Rita", "Samuel", "Teresa",
    "Ulrich", "Vera", "Walter", "Xenia", "Yasmin", "Zane",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Barnes", "Costa", "Dubois", "Ericsson", "Ferreira", "Garcia", "Hoffmann",
    "Ivanov", "Jensen", "Keller", "Lopez", "Martins", "Novak", "Oliveira", "Pereira", "Quinn",
    "Rossi", "Silva", "Tanaka", "Ueda", "Vasquez", "Weber", "Xavier", "Young", "Zimmermann",
];

const PREFIXES: &[&str] = &["Mr.", "Ms.", "Mrs.", "Dr.", "Prof."];

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, FIRST_NAMES).to_string()
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, LAST_NAMES).to_string()
}

pub fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

pub fn prefix<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, PREFIXES).to_string()
}
