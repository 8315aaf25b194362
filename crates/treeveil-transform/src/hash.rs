#![deny(unsafe_code)]

//! Keyed one-way digest for identifying values.

use sha1::{Digest, Sha1};

/// Obfuscates a value by hashing it together with a caller-supplied nonce.
///
/// The digest is SHA-1 over the value bytes followed by the nonce bytes,
/// rendered as lowercase hex. Deterministic: the same (value, nonce) pair
/// always yields the same digest, which is what preserves cross-record
/// references under one nonce. This is obfuscation, not encryption; anyone
/// holding the nonce can confirm a guessed value.
pub fn obfuscate_value(value: &str, nonce: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(value.as_bytes());
    hasher.update(nonce.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_sha1_vectors() {
        // sha1("7xyz") and sha1("Smithxyz")
        assert_eq!(
            obfuscate_value("7", "xyz"),
            "67663c4c3019490193f8349f9d291d837992ca3c"
        );
        assert_eq!(
            obfuscate_value("Smith", "xyz"),
            "92812af02c906dfc4bcebec17ae48d4050db9f3d"
        );
    }

    #[test]
    fn digest_is_lowercase_hex_of_fixed_width() {
        let digest = obfuscate_value("anything", "n");
        assert_eq!(digest.len(), 40);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn nonce_changes_the_digest() {
        assert_ne!(obfuscate_value("7", "xyz"), obfuscate_value("7", "abc"));
    }

    #[test]
    fn concatenation_order_is_value_then_nonce() {
        // "ab" + "c" and "a" + "bc" concatenate to the same bytes; the
        // digest keys on the concatenation, not on the split point.
        assert_eq!(obfuscate_value("ab", "c"), obfuscate_value("a", "bc"));
    }
}
