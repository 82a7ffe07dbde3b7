//! Property tests for the token codec

use proptest::prelude::*;

use postboard::backend::auth::tokens::{issue_at, verify_at, TokenError, TokenUser};

const SECRET: &str = "property-secret";
const BASE_TIME: i64 = 1_700_000_000;

fn identity() -> impl Strategy<Value = TokenUser> {
    (1i64..i64::MAX, "[a-z]{1,10}@[a-z]{1,10}\\.com")
        .prop_map(|(id, email)| TokenUser { id, email })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn accepted_until_expiry(user in identity(), ttl in 1i64..100_000, offset in 0i64..100_000) {
        let token = issue_at(&user, SECRET, ttl, BASE_TIME).unwrap();
        let now = BASE_TIME + offset;

        match verify_at(&token, SECRET, now) {
            Ok(claims) => {
                prop_assert!(offset <= ttl);
                prop_assert_eq!(claims.user, user);
            }
            Err(TokenError::Expired) => prop_assert!(offset > ttl),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn other_secrets_never_verify(user in identity(), secret in "[a-zA-Z0-9]{1,32}") {
        prop_assume!(secret != SECRET);
        let token = issue_at(&user, SECRET, 3600, BASE_TIME).unwrap();

        prop_assert!(matches!(
            verify_at(&token, &secret, BASE_TIME),
            Err(TokenError::InvalidSignature)
        ));
    }
}
