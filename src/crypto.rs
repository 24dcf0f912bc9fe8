//! AES-256-GCM sealing for hidden payloads.
//!
//! The engines treat this layer as an opaque, invertible byte transform:
//! the framed payload goes in, sealed bytes come out, and only the right
//! passphrase opens them again. Output format:
//! `[nonce: 12 bytes][ciphertext][tag: 16 bytes]`, nonce drawn fresh per
//! seal. The key is derived from the passphrase with a domain-separated
//! SHA-256 hash.

use crate::error::{BitveilError, Result};
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Nonce size for AES-GCM (96 bits).
pub const NONCE_SIZE: usize = 12;

/// Authentication tag size (128 bits).
pub const TAG_SIZE: usize = 16;

/// Bytes added to a payload by sealing (nonce + tag).
pub const SEAL_OVERHEAD: usize = NONCE_SIZE + TAG_SIZE;

/// Derive the 256-bit cipher key from a passphrase.
fn derive_key(passphrase: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"bitveil_payload_key_v1");
    hasher.update(passphrase.as_bytes());
    let hash = hasher.finalize();
    let mut key = [0u8; 32];
    key.copy_from_slice(&hash);
    key
}

/// Seal `data` under `passphrase`.
pub fn seal(data: &[u8], passphrase: &str) -> Result<Vec<u8>> {
    let key = derive_key(passphrase);
    let cipher = Aes256Gcm::new((&key).into());

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, data)
        .map_err(|e| BitveilError::Crypto(format!("encryption failed: {}", e)))?;

    let mut sealed = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    sealed.extend_from_slice(&nonce_bytes);
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

/// Open sealed `data` with `passphrase`.
///
/// Fails with [`BitveilError::Crypto`] when the passphrase is wrong or
/// the sealed bytes were altered.
pub fn open(data: &[u8], passphrase: &str) -> Result<Vec<u8>> {
    if data.len() < SEAL_OVERHEAD {
        return Err(BitveilError::Crypto(format!(
            "sealed payload of {} bytes is shorter than the {} byte overhead",
            data.len(),
            SEAL_OVERHEAD
        )));
    }

    let key = derive_key(passphrase);
    let cipher = Aes256Gcm::new((&key).into());
    let nonce = Nonce::from_slice(&data[..NONCE_SIZE]);

    cipher.decrypt(nonce, &data[NONCE_SIZE..]).map_err(|_| {
        BitveilError::Crypto("authentication failed; wrong passphrase or corrupted payload".to_string())
    })
}
