use payrelay::webhooks::WebhookVerifier;
use proptest::prelude::*;

/// Property-based tests for webhook signature verification
///
/// Validates:
/// - Any body signed with the shared secret verifies within the tolerance
/// - Flipping any single byte of the body breaks verification
/// - A different secret never verifies

const SECRET: &str = "whsec_property_secret";
const NOW: i64 = 1_750_000_000;

#[cfg(test)]
mod signature_tests {
    use super::*;

    fn verifier() -> WebhookVerifier {
        WebhookVerifier::new(SECRET, 300)
    }

    proptest! {
        #[test]
        fn test_signed_bodies_verify(
            body in proptest::collection::vec(any::<u8>(), 0..512),
            skew in -300i64..=300i64
        ) {
            let header = verifier().sign(&body, NOW + skew).unwrap();
            prop_assert!(verifier().verify_at(&body, &header, NOW).is_ok());
        }

        #[test]
        fn test_tampered_bodies_rejected(
            body in proptest::collection::vec(any::<u8>(), 1..512),
            index in any::<prop::sample::Index>(),
            flip in 1u8..=255u8
        ) {
            let header = verifier().sign(&body, NOW).unwrap();

            let mut tampered = body.clone();
            let i = index.index(tampered.len());
            tampered[i] ^= flip;

            prop_assert!(verifier().verify_at(&tampered, &header, NOW).is_err());
        }

        #[test]
        fn test_foreign_secret_rejected(
            body in proptest::collection::vec(any::<u8>(), 0..256),
            other in "whsec_[a-z0-9]{8,24}"
        ) {
            prop_assume!(other != SECRET);
            let header = WebhookVerifier::new(other, 300).sign(&body, NOW).unwrap();
            prop_assert!(verifier().verify_at(&body, &header, NOW).is_err());
        }
    }
}
