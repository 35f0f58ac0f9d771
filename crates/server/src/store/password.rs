//! Salted PBKDF2-HMAC-SHA512 password hashing.
//!
//! Stored format: `<salt>:<derived key>`, both lowercase hex. The salt is
//! 16 random bytes (32 hex chars) and is fed to PBKDF2 as its hex text, so
//! records produced by the previous Node deployment keep verifying.

use sha2::Sha512;

/// Random salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes.
pub const KEY_LEN: usize = 64;

/// PBKDF2 iteration count.
pub const ITERATIONS: u32 = 100_000;

/// Hash a password with a fresh random salt.
///
/// Two calls with the same password return different strings.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::random();
    let salt = hex::encode(salt);
    let key = derive_key_hex(password, &salt);
    format!("{salt}:{key}")
}

/// Check a password against a stored `salt:key` string.
///
/// Malformed input (no separator, empty salt or key) returns `false`.
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Some((salt, stored)) = hash.split_once(':') else {
        return false;
    };
    if salt.is_empty() || stored.is_empty() {
        return false;
    }

    let computed = derive_key_hex(password, salt);
    constant_time_compare(&computed, stored)
}

fn derive_key_hex(password: &str, salt: &str) -> String {
    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), ITERATIONS, &mut key);
    hex::encode(key)
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
