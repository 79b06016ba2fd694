//! ProSafe Login Token Derivation
//!
//! The switch never receives the plaintext password. The login form submits an
//! HMAC-MD5 of the password repeated into a fixed 2048-unit buffer, keyed with a
//! constant baked into the firmware's login page script.

use hmac::{Hmac, Mac};
use md5::Md5;
use std::fmt::Write;

/// Key used by the firmware's login script
const HMAC_KEY: &[u8] = b"YOU_CAN_NOT_PASS";

/// Size of the buffer the password is repeated into
pub const PADDED_LEN: usize = 2048;

const SEPARATOR: char = '\0';

/// Build the padded buffer the login token is computed over.
///
/// The password and one NUL separator form a unit that is repeated as many whole
/// times as fit, then NUL padding fills the remainder. Lengths are counted in
/// characters like the firmware's script does, so an ASCII password always yields
/// exactly [`PADDED_LEN`] bytes. A password of 2048 characters or more fits zero
/// times and produces a buffer of only NULs.
pub fn padded_password(password: &str) -> Vec<u8> {
    let unit_len = password.chars().count() + 1;
    let repeat_count = PADDED_LEN / unit_len;
    let remaining = PADDED_LEN - repeat_count * unit_len;

    let mut padded = String::with_capacity(PADDED_LEN);
    for _ in 0..repeat_count {
        padded.push_str(password);
        padded.push(SEPARATOR);
    }
    padded.extend(std::iter::repeat(SEPARATOR).take(remaining));

    padded.into_bytes()
}

/// Hash a plaintext password into the hex token expected by `POST /login.htm`
pub fn hash_password(password: &str) -> String {
    let mut mac =
        Hmac::<Md5>::new_from_slice(HMAC_KEY).expect("HMAC accepts keys of any length");
    mac.update(&padded_password(password));

    mac.finalize()
        .into_bytes()
        .iter()
        .fold(String::with_capacity(32), |mut hex, byte| {
            let _ = write!(hex, "{:02x}", byte);
            hex
        })
}
