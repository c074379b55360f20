//! Vendor access token generation and hashing.
//!
//! Tokens are handed to vendors once and never stored, only the hex encoded SHA-256 digest of
//! a token is persisted.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;
use sha2::{Digest, Sha256};

const TOKEN_BYTES: usize = 32;

/// Generates a new random access token encoded as unpadded base64url.
pub fn generate_access_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);

    URL_SAFE_NO_PAD.encode(bytes)
}

/// Hashes an access token into the lowercase hex form stored in the database.
pub fn hash_access_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
