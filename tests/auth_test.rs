//! Login token derivation tests
//!
//! Expected digests were produced with the reference HMAC-MD5 construction the
//! switch firmware uses.

use proptest::prelude::*;
use prosafe_exporter::prosafe::auth::{hash_password, padded_password, PADDED_LEN};

#[test]
fn test_known_password_digest() {
    // Given: A common password
    // When: Hashing it
    let token = hash_password("password");

    // Then: The digest matches the firmware's expected token
    assert_eq!(token, "0b2405254f79fb7deec397a57c0bf619");
}

#[test]
fn test_fifteen_char_password_fills_buffer_exactly() {
    // Given: A 15 character password (unit length 16)
    let password = "abcdefghijklmno";

    // When: Building the padded buffer
    let padded = padded_password(password);

    // Then: 128 repetitions fill the buffer with no extra padding
    let expected: Vec<u8> = format!("{}\0", password).repeat(128).into_bytes();
    assert_eq!(padded.len(), PADDED_LEN);
    assert_eq!(padded, expected);
}

#[test]
fn test_remainder_is_nul_padded() {
    // Given: A password whose unit length does not divide 2048 (unit 7)
    let padded = padded_password("secret");

    // Then: 292 repetitions use 2044 bytes and 4 NULs follow
    assert_eq!(padded.len(), PADDED_LEN);
    assert_eq!(&padded[..7], b"secret\0");
    assert_eq!(&padded[2037..2044], b"secret\0");
    assert!(padded[2044..].iter().all(|&b| b == 0));
}

#[test]
fn test_overlong_password_yields_all_nul_buffer() {
    // Given: Passwords that cannot fit a single unit
    for len in [2048, 2049, 3000] {
        let password = "x".repeat(len);

        // When: Building the padded buffer
        let padded = padded_password(&password);

        // Then: The buffer is all NUL bytes
        assert_eq!(padded.len(), PADDED_LEN, "length {}", len);
        assert!(padded.iter().all(|&b| b == 0), "length {}", len);
    }
}

#[test]
fn test_overlong_and_empty_passwords_share_a_token() {
    // Given: An empty password and one too long to fit
    // Both buffers are 2048 NULs, so both hash the same
    let empty = hash_password("");
    let overlong = hash_password(&"x".repeat(3000));

    assert_eq!(empty, "bdbef80271a1909e06fe22e8fbf1e767");
    assert_eq!(empty, overlong);
}

#[test]
fn test_password_of_2046_chars_repeats_once() {
    // Given: A password whose unit is 2047 long
    let password = "y".repeat(2046);

    // When: Building the padded buffer
    let padded = padded_password(&password);

    // Then: One repetition plus a single padding NUL
    assert_eq!(padded.len(), PADDED_LEN);
    assert_eq!(&padded[..2046], password.as_bytes());
    assert_eq!(&padded[2046..], &[0, 0]);
}

proptest! {
    #[test]
    fn test_ascii_passwords_always_pad_to_2048(password in "[ -~]{0,3000}") {
        prop_assert_eq!(padded_password(&password).len(), PADDED_LEN);
    }

    #[test]
    fn test_token_is_deterministic_lowercase_hex(password in "\\PC{0,64}") {
        let first = hash_password(&password);
        let second = hash_password(&password);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), 32);
        prop_assert!(first.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
