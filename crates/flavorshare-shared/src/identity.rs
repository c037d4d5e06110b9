use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::Rng;

use crate::constants::{TOKEN_ALPHABET, TOKEN_LEN, USER_ID_LEN};
use crate::types::UserId;

/// Derive the user id for an email address.
///
/// The id is the standard base64 encoding of the email's UTF-8 bytes, cut
/// to [`USER_ID_LEN`] characters. It is an identity label, not a credential:
/// anyone who knows an email can derive the same id, and two accounts
/// registered with the same email share it.
pub fn derive_user_id(email: &str) -> UserId {
    let mut encoded = STANDARD.encode(email.as_bytes());
    // base64 output is ASCII, so byte truncation stays on a char boundary
    encoded.truncate(USER_ID_LEN);
    UserId(encoded)
}

/// Local part of an email address (everything before the first `@`).
pub fn username_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Generate a short random lowercase base-36 token.
///
/// Collisions are possible in principle; callers treat tokens as unique.
pub fn random_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}
