#![deny(unsafe_code)]

//! Nonce generation for runs where the caller supplied none.
//!
//! The nonce is the only way to reproduce consistent digests across runs,
//! so callers are expected to report a generated nonce to the user.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Length of a generated nonce.
pub const NONCE_LEN: usize = 6;

/// Draws a 6-character alphanumeric nonce (uppercase, lowercase, digits)
/// from the given source, which tests can seed deterministically.
pub fn generate_nonce<R: Rng>(rng: &mut R) -> String {
    (0..NONCE_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// Draws a nonce from the thread-local generator.
pub fn random_nonce() -> String {
    generate_nonce(&mut rand::thread_rng())
}
