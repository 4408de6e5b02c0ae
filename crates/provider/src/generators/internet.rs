//! Internet-flavored value generators.

use super::pick;
use rand::Rng;
use uuid::Uuid;

const DOMAIN_WORDS: &[&str] = &[
    "acme", "globex", "initech", "umbrella", "stark", "wayne", "hooli", "vandelay",
];

const TLDS: &[&str] = &["com", "org", "net", "io", "dev"];

pub fn domain_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}.{}", pick(rng, DOMAIN_WORDS), pick(rng, TLDS))
}

pub fn user_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}",
        super::name::first_name(rng).to_lowercase(),
        super::name::last_name(rng).to_lowercase()
    )
}

pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}@{}", user_name(rng), domain_name(rng))
}

pub fn ipv4<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}.{}.{}",
        rng.random_range(1..=254u8),
        rng.random_range(0..=255u8),
        rng.random_range(0..=255u8),
        rng.random_range(1..=254u8)
    )
}

/// Random UUID v4 drawn from the provided RNG so seeded runs stay
/// reproducible.
pub fn uuid_v4<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes).to_string()
}
