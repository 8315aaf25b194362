//! Property tests for the keyed digest.

use proptest::prelude::*;

use treeveil_transform::obfuscate_value;

proptest! {
    #[test]
    fn digest_is_deterministic(value in ".*", nonce in "[A-Za-z0-9]{0,12}") {
        prop_assert_eq!(
            obfuscate_value(&value, &nonce),
            obfuscate_value(&value, &nonce)
        );
    }

    #[test]
    fn distinct_values_get_distinct_digests(
        left in ".+",
        right in ".+",
        nonce in "[A-Za-z0-9]{6}",
    ) {
        prop_assume!(left != right);
        prop_assert_ne!(
            obfuscate_value(&left, &nonce),
            obfuscate_value(&right, &nonce)
        );
    }

    #[test]
    fn distinct_nonces_get_distinct_digests(
        value in ".+",
        left in "[A-Za-z0-9]{6}",
        right in "[A-Za-z0-9]{6}",
    ) {
        prop_assume!(left != right);
        prop_assert_ne!(
            obfuscate_value(&value, &left),
            obfuscate_value(&value, &right)
        );
    }

    #[test]
    fn digest_width_is_stable(value in ".*", nonce in "[A-Za-z0-9]{0,12}") {
        prop_assert_eq!(obfuscate_value(&value, &nonce).len(), 40);
    }
}
