//! Token Cipher Port - encryption at rest for the API bearer token.

/// Symmetric encryption of short secrets into transport-safe text.
///
/// Both directions map the empty string to the empty string. `decrypt`
/// never fails loudly: a blob it cannot open (wrong key, corruption) comes
/// back as `""`, which callers treat as "token not configured".
pub trait TokenCipher: Send + Sync {
    fn encrypt(&self, plaintext: &str) -> String;

    fn decrypt(&self, blob: &str) -> String;
}
