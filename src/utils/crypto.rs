//! # Cipher Seam
//!
//! The wire layer only needs `encrypt(key, plaintext) -> ciphertext`. The block
//! cipher behind it (and the 16-byte session keys it takes) belongs to the session
//! layer, which hands an implementation to
//! [`Writer::encrypt_and_write`](crate::Writer::encrypt_and_write).

use crate::error::Result;

/// Symmetric encryption used by [`Writer::encrypt_and_write`](crate::Writer::encrypt_and_write)
pub trait Cipher: Send + Sync {
    /// Encrypts `plaintext` under `key`
    ///
    /// Key length requirements belong to the implementation. A rejected key or
    /// input should surface as `ProtocolError::EncryptionFailure`.
    fn encrypt(&self, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>;
}

impl<C: Cipher + ?Sized> Cipher for &C {
    fn encrypt(&self, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        (**self).encrypt(key, plaintext)
    }
}

impl<C: Cipher + ?Sized> Cipher for Box<C> {
    fn encrypt(&self, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        (**self).encrypt(key, plaintext)
    }
}
