//! Sealed-box encryption for secret values.
//!
//! GitHub requires secret values encrypted with the target's public key using
//! libsodium sealed boxes (X25519 + XSalsa20-Poly1305). The service decrypts
//! them server-side, so the wire format must match exactly.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use crypto_box::PublicKey;

use crate::error::{Error, Result};

/// Curve25519 public keys are always 32 bytes.
const KEY_LEN: usize = 32;

/// Encrypt a plaintext value against a base64-encoded public key.
///
/// Each call seals with a fresh ephemeral keypair, so encrypting the same
/// input twice never yields the same ciphertext. Returns the sealed box
/// base64-encoded, ready for the secrets API.
///
/// # Errors
///
/// Returns `Error::InvalidKey` if the key is not valid base64 or is not
/// 32 bytes, and `Error::Encryption` if sealing itself fails.
pub fn seal(plaintext: &str, public_key_b64: &str) -> Result<String> {
    let key_bytes = BASE64
        .decode(public_key_b64)
        .map_err(|e| Error::InvalidKey(format!("bad base64: {}", e)))?;

    let key: [u8; KEY_LEN] = key_bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| {
            Error::InvalidKey(format!("expected {} bytes, got {}", KEY_LEN, bytes.len()))
        })?;

    let public_key = PublicKey::from(key);
    let sealed = public_key
        .seal(&mut crypto_box::aead::OsRng, plaintext.as_bytes())
        .map_err(|e| Error::Encryption(format!("{}", e)))?;

    Ok(BASE64.encode(sealed))
}
