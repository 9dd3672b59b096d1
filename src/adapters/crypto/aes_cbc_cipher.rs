//! AES-256-CBC token cipher.
//!
//! Blob format: `BASE64(iv || ciphertext)` with a random 16-byte IV per
//! encryption and PKCS#7 padding.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, Iv, Key, KeyIvInit};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::RngCore;

use crate::ports::{EncryptionKey, KeyProvider, TokenCipher};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// IV length in bytes (one AES block)
const IV_LENGTH: usize = 16;

/// AES block size in bytes
const BLOCK_SIZE: usize = 16;

#[derive(Debug, thiserror::Error)]
enum DecryptError {
    #[error("blob is not valid base64")]
    InvalidEncoding,

    #[error("blob is too short or not block aligned ({0} bytes)")]
    Malformed(usize),

    #[error("padding check failed (wrong key or corrupted data)")]
    BadPadding,

    #[error("plaintext is not valid UTF-8")]
    NotUtf8,
}

/// Encrypts bearer tokens with a key obtained once from a [`KeyProvider`].
#[derive(Debug)]
pub struct AesCbcTokenCipher {
    key: EncryptionKey,
}

impl AesCbcTokenCipher {
    pub fn new(key_provider: &dyn KeyProvider) -> Self {
        Self {
            key: key_provider.encryption_key(),
        }
    }

    fn try_decrypt(&self, blob: &str) -> Result<String, DecryptError> {
        let combined = BASE64
            .decode(blob.trim())
            .map_err(|_| DecryptError::InvalidEncoding)?;

        if combined.len() < IV_LENGTH + BLOCK_SIZE
            || (combined.len() - IV_LENGTH) % BLOCK_SIZE != 0
        {
            return Err(DecryptError::Malformed(combined.len()));
        }

        let (iv, ciphertext) = combined.split_at(IV_LENGTH);
        let key = Key::<Aes256CbcDec>::from_slice(self.key.as_bytes());
        let iv = Iv::<Aes256CbcDec>::from_slice(iv);

        let plaintext = Aes256CbcDec::new(key, iv)
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| DecryptError::BadPadding)?;

        String::from_utf8(plaintext).map_err(|_| DecryptError::NotUtf8)
    }
}

impl TokenCipher for AesCbcTokenCipher {
    fn encrypt(&self, plaintext: &str) -> String {
        if plaintext.is_empty() {
            return String::new();
        }

        let mut iv_bytes = [0u8; IV_LENGTH];
        rand::thread_rng().fill_bytes(&mut iv_bytes);

        let key = Key::<Aes256CbcEnc>::from_slice(self.key.as_bytes());
        let iv = Iv::<Aes256CbcEnc>::from_slice(&iv_bytes);
        let ciphertext =
            Aes256CbcEnc::new(key, iv).encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        let mut combined = Vec::with_capacity(IV_LENGTH + ciphertext.len());
        combined.extend_from_slice(&iv_bytes);
        combined.extend_from_slice(&ciphertext);

        BASE64.encode(&combined)
    }

    fn decrypt(&self, blob: &str) -> String {
        if blob.is_empty() {
            return String::new();
        }

        match self.try_decrypt(blob) {
            Ok(plaintext) => plaintext,
            Err(e) => {
                tracing::debug!(error = %e, "Stored token could not be decrypted");
                String::new()
            }
        }
    }
}
