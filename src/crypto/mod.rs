/// Cryptography module for credential handling
///
/// Password digests are account-salted SHA-256, hex encoded.

pub mod password;

pub use password::{hash_password, verify_password};
