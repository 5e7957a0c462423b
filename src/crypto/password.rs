/// Account-salted password hashing
///
/// The digest format is persisted alongside accounts, so it must never change:
/// `hex(sha256(password || lowercase_hex(account_id)))`.

use sha2::{Digest, Sha256};

/// Hash a plaintext password for the given account id.
///
/// Deterministic: the same inputs always yield the same 64-character hex
/// digest. The account id is appended as a salt, so the same password on two
/// accounts produces two different digests.
pub fn hash_password(password: &str, account_id: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(format!("{:x}", account_id).as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a plaintext password against a stored digest.
pub fn verify_password(password: &str, account_id: u64, digest: &str) -> bool {
    let computed = hash_password(password, account_id);
    constant_time_eq(computed.as_bytes(), digest.as_bytes())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_password("secret", 7), hash_password("secret", 7));
    }

    #[test]
    fn test_hash_is_salted_by_account() {
        assert_ne!(hash_password("secret", 7), hash_password("secret", 8));
        assert_ne!(hash_password("secret", 1), hash_password("secret", 0x10));
    }

    #[test]
    fn test_known_digests() {
        // sha256("secret" + "7")
        assert_eq!(
            hash_password("secret", 7),
            "5c5b5202833fb1b8653184f73b2b4e40ac7b7e6ebab843a157c9bf992755be42"
        );
        // id is appended in lowercase hex: 255 -> "ff"
        assert_eq!(
            hash_password("hunter2", 255),
            "619dcbb50a1caf1f7067191fdef051af0c794bebb86f442029a405ae4c6a361c"
        );
    }

    #[test]
    fn test_digest_shape() {
        let digest = hash_password("", 0);
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_verify_password() {
        let digest = hash_password("secret", 7);
        assert!(verify_password("secret", 7, &digest));
        assert!(!verify_password("Secret", 7, &digest));
        assert!(!verify_password("secret", 8, &digest));
        assert!(!verify_password("secret", 7, ""));
    }
}
