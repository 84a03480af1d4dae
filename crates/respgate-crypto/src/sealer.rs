use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chacha20poly1305::aead::Aead;
use chacha20poly1305::{ChaCha20Poly1305, KeyInit, Nonce};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::errors::CryptoError;

type HmacSha256 = Hmac<Sha256>;

const NONCE_LEN: usize = 12;

/// Symmetric seal/open contract used by the token codec.
///
/// `open` returns `None` on any failure (wrong key, truncated payload,
/// foreign producer). Callers treat an unopenable value as an ordinary
/// opaque string, so the failure modes are not distinguished.
pub trait TokenSealer: Send + Sync {
    fn seal(&self, plaintext: &str) -> Result<String, CryptoError>;
    fn open(&self, opaque: &str) -> Option<String>;
}

/// ChaCha20-Poly1305 sealer keyed from the configured signing key.
///
/// The nonce is the leading 12 bytes of HMAC-SHA256(key, plaintext), which
/// makes sealing deterministic: the same key and payload always produce the
/// same wire value. Nonce reuse across distinct payloads cannot occur because
/// the nonce is a function of the payload.
#[derive(Clone)]
pub struct DeterministicSealer {
    key: [u8; 32],
}

impl DeterministicSealer {
    pub fn from_secret(secret: &str) -> Self {
        let digest = Sha256::digest(secret.as_bytes());
        let mut key = [0u8; 32];
        key.copy_from_slice(&digest);
        Self { key }
    }

    fn derive_nonce(&self, plaintext: &str) -> Result<[u8; NONCE_LEN], CryptoError> {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(&self.key)
            .map_err(|err| CryptoError::seal(&format!("nonce derivation key: {err}")))?;
        mac.update(plaintext.as_bytes());
        let tag = mac.finalize().into_bytes();
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&tag[..NONCE_LEN]);
        Ok(nonce)
    }
}

impl TokenSealer for DeterministicSealer {
    fn seal(&self, plaintext: &str) -> Result<String, CryptoError> {
        let nonce = self.derive_nonce(plaintext)?;
        let aead = ChaCha20Poly1305::new_from_slice(&self.key)
            .map_err(|err| CryptoError::seal(&format!("cipher init: {err}")))?;
        let ciphertext = aead
            .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
            .map_err(|err| CryptoError::seal(&format!("encrypt: {err}")))?;

        let mut wire = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        wire.extend_from_slice(&nonce);
        wire.extend_from_slice(&ciphertext);
        Ok(URL_SAFE_NO_PAD.encode(wire))
    }

    fn open(&self, opaque: &str) -> Option<String> {
        let wire = URL_SAFE_NO_PAD.decode(opaque.as_bytes()).ok()?;
        if wire.len() <= NONCE_LEN {
            return None;
        }
        let (nonce, ciphertext) = wire.split_at(NONCE_LEN);
        let aead = ChaCha20Poly1305::new_from_slice(&self.key).ok()?;
        let plaintext = aead.decrypt(Nonce::from_slice(nonce), ciphertext).ok()?;
        String::from_utf8(plaintext).ok()
    }
}
