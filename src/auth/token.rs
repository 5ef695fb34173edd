// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const PROFILE_TOKEN_BYTES: usize = 32;

/// Generate a profile token using the OS RNG.
pub fn generate_profile_token() -> String {
    let mut rng = OsRng;
    generate_token(&mut rng, PROFILE_TOKEN_BYTES)
}

/// URL-safe Base64 (no padding) over `nbytes` random bytes.
/// 32 bytes -> 43 chars.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}

/// Storage rows are keyed by this, never by the raw cookie value.
pub fn hash_token(token: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let out = hasher.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}

/// True when `token` decodes to exactly `PROFILE_TOKEN_BYTES` bytes.
pub fn is_well_formed(token: &str) -> bool {
    base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(token)
        .map(|bytes| bytes.len() == PROFILE_TOKEN_BYTES)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn token_is_url_safe_no_pad() {
        let mut rng = StdRng::seed_from_u64(123);
        let t = generate_token(&mut rng, 32);

        assert!(t
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(t.len(), 43);
    }

    #[test]
    fn generated_profile_tokens_are_well_formed() {
        let t = generate_profile_token();
        assert!(is_well_formed(&t));
        assert_ne!(t, generate_profile_token());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("short"));
        assert!(!is_well_formed("has spaces and = padding"));

        let mut rng = StdRng::seed_from_u64(9);
        assert!(!is_well_formed(&generate_token(&mut rng, 16)));
    }

    #[test]
    fn hash_is_deterministic_and_input_sensitive() {
        assert_eq!(hash_token("hello"), hash_token("hello"));
        assert_ne!(hash_token("hello"), hash_token("hello!"));
    }
}
