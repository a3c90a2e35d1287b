/*!
Key encapsulation sessions.

A `KemSession` wraps one bound KEM algorithm and at most one key pair at a
time. The lifecycle is init, then generate or import a secret key, then any
number of encapsulate/decapsulate calls, then clean. Cleaning zeroes the
secret key, unbinds the algorithm, and leaves the session ready for a fresh
`init`. Dropping the session cleans it.

A session is single-owner mutable state; wrap it in a lock before sharing it
across threads. Independent sessions run in parallel freely.
*/

use crate::backend::kem::{self as backend, KemScheme};
use crate::error::{Error, Result};
use crate::registry::{registry, AlgorithmFamily};
use crate::secret::SecretBuf;

/// Size and security metadata for one KEM, captured from the backend when
/// the session binds to it. Immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KemDetails {
    pub name: String,
    pub version: String,
    pub claimed_nist_level: u8,
    pub is_ind_cca: bool,
    pub length_public_key: usize,
    pub length_secret_key: usize,
    pub length_ciphertext: usize,
    pub length_shared_secret: usize,
}

struct Bound {
    scheme: &'static dyn KemScheme,
    details: KemDetails,
}

/// One bound instance of a KEM algorithm.
#[derive(Default)]
pub struct KemSession {
    bound: Option<Bound>,
    secret_key: SecretBuf,
}

impl KemSession {
    /// Create an uninitialized session. Call [`init`](Self::init) before any
    /// other operation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the session to `name` and optionally import a secret key.
    ///
    /// The imported key is retained verbatim; its length is only checked
    /// when a decapsulation needs it. With no key, call
    /// [`generate_keypair`](Self::generate_keypair) before decapsulating.
    pub fn init(&mut self, name: &str, secret_key: Option<&[u8]>) -> Result<()> {
        let reg = registry();
        if !reg.is_enabled(AlgorithmFamily::Kem, name) {
            if reg.is_supported(AlgorithmFamily::Kem, name) {
                return Err(Error::DisabledAlgorithm(name.to_string()));
            }
            return Err(Error::UnsupportedAlgorithm(name.to_string()));
        }
        let scheme = backend::find(name)
            .and_then(backend::KemEntry::scheme)
            .ok_or_else(|| Error::UnsupportedAlgorithm(name.to_string()))?;

        self.clean();
        let details = KemDetails {
            name: name.to_string(),
            version: scheme.version().to_string(),
            claimed_nist_level: scheme.claimed_nist_level(),
            is_ind_cca: scheme.is_ind_cca(),
            length_public_key: scheme.public_key_len(),
            length_secret_key: scheme.secret_key_len(),
            length_ciphertext: scheme.ciphertext_len(),
            length_shared_secret: scheme.shared_secret_len(),
        };
        self.bound = Some(Bound { scheme, details });
        if let Some(key) = secret_key {
            self.secret_key = SecretBuf::from_bytes(key);
        }
        Ok(())
    }

    fn bound(&self) -> Result<&Bound> {
        self.bound.as_ref().ok_or(Error::NotInitialized)
    }

    /// Details of the bound algorithm.
    pub fn details(&self) -> Result<&KemDetails> {
        Ok(&self.bound()?.details)
    }

    /// Generate a fresh key pair, returning the public key. The secret key
    /// is stored in the session, replacing any previously held one.
    pub fn generate_keypair(&mut self) -> Result<Vec<u8>> {
        let bound = self.bound.as_ref().ok_or(Error::NotInitialized)?;
        let (public_key, secret_key) = bound.scheme.keypair()?;
        if public_key.len() != bound.details.length_public_key
            || secret_key.len() != bound.details.length_secret_key
        {
            return Err(Error::KeyGenerationFailed);
        }
        self.secret_key.replace(secret_key);
        Ok(public_key)
    }

    /// Encapsulate against `public_key`, returning (ciphertext, shared
    /// secret). Does not touch the session's own key material.
    pub fn encap_secret(&self, public_key: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
        let bound = self.bound()?;
        if public_key.len() != bound.details.length_public_key {
            return Err(Error::InvalidPublicKeyLength {
                expected: bound.details.length_public_key,
                actual: public_key.len(),
            });
        }
        bound.scheme.encapsulate(public_key)
    }

    /// Decapsulate `ciphertext` with the held secret key, returning the
    /// shared secret.
    pub fn decap_secret(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let bound = self.bound()?;
        if ciphertext.len() != bound.details.length_ciphertext {
            return Err(Error::InvalidCiphertextLength {
                expected: bound.details.length_ciphertext,
                actual: ciphertext.len(),
            });
        }
        if self.secret_key.len() != bound.details.length_secret_key {
            return Err(Error::MissingOrInvalidSecretKey {
                expected: bound.details.length_secret_key,
                actual: self.secret_key.len(),
            });
        }
        bound.scheme.decapsulate(ciphertext, self.secret_key.as_bytes())
    }

    /// The held secret key, verbatim. Empty if none is held.
    pub fn export_secret_key(&self) -> &[u8] {
        self.secret_key.as_bytes()
    }

    /// Zero the secret key and unbind the algorithm. Idempotent; the session
    /// can be reused with another [`init`](Self::init).
    pub fn clean(&mut self) {
        self.secret_key.clear();
        self.bound = None;
    }
}

impl Drop for KemSession {
    fn drop(&mut self) {
        self.clean();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations_require_init() {
        let session = KemSession::new();
        assert!(matches!(session.details(), Err(Error::NotInitialized)));
        assert!(matches!(
            session.encap_secret(&[0u8; 800]),
            Err(Error::NotInitialized)
        ));
    }

    #[test]
    fn test_init_captures_details() -> Result<()> {
        let mut session = KemSession::new();
        session.init("Kyber768", None)?;
        let details = session.details()?;
        assert_eq!(details.name, "Kyber768");
        assert_eq!(details.claimed_nist_level, 3);
        assert!(details.is_ind_cca);
        assert_eq!(details.length_shared_secret, 32);
        Ok(())
    }

    #[test]
    fn test_clean_resets_to_uninitialized() -> Result<()> {
        let mut session = KemSession::new();
        session.init("Kyber768", None)?;
        session.generate_keypair()?;
        session.clean();
        assert!(matches!(session.details(), Err(Error::NotInitialized)));
        assert!(session.export_secret_key().is_empty());
        session.clean(); // idempotent
        session.init("Kyber768", None)?;
        Ok(())
    }
}
