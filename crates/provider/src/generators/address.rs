//! Postal address generators.

use super::pick;
use rand::Rng;

const CITIES: &[&str] = &[
    "Lisbon", "Porto", "Madrid", "Berlin", "Vienna", "Prague", "Oslo", "Helsinki", "Dublin",
    "Zurich", "Ghent", "Lyon", "Turin", "Krakow", "Riga", "Tallinn",
];

const STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Lane", "Road", "Square", "Terrace"];

const STATES: &[&str] = &[
    "Alontra", "Beira", "Corvana", "Dessano", "Elvira", "Foresta", "Granda", "Helves",
];

const COUNTRIES: &[&str] = &[
    "Portugal", "Spain", "Germany", "Austria", "Norway", "Finland", "Ireland", "Switzerland",
    "Belgium", "France", "Italy", "Poland", "Latvia", "Estonia",
];

pub fn city<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, CITIES).to_string()
}

pub fn street_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {}",
        super::name::last_name(rng),
        pick(rng, STREET_SUFFIXES)
    )
}

/// Street number plus street name, e.g. `42 Weber Avenue`.
pub fn street_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", rng.random_range(1..=999), street_name(rng))
}

/// Five-digit zip code, leading zeros allowed.
pub fn zip_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:05}", rng.random_range(0..=99999))
}

pub fn state<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, STATES).to_string()
}

pub fn country<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, COUNTRIES).to_string()
}
