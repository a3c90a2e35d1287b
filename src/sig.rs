/*!
Digital signature sessions.

Same lifecycle shape as [`crate::kem::KemSession`], with sign/verify in place
of encapsulate/decapsulate. Signatures may be shorter than the algorithm's
maximum; callers must use the returned length.
*/

use crate::backend::sig::{self as backend, SigScheme};
use crate::error::{Error, Result};
use crate::registry::{registry, AlgorithmFamily};
use crate::secret::SecretBuf;

/// Size and security metadata for one signature scheme, captured from the
/// backend when the session binds to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigDetails {
    pub name: String,
    pub version: String,
    pub claimed_nist_level: u8,
    pub is_euf_cma: bool,
    pub length_public_key: usize,
    pub length_secret_key: usize,
    pub max_length_signature: usize,
}

struct Bound {
    scheme: &'static dyn SigScheme,
    details: SigDetails,
}

/// One bound instance of a signature algorithm.
#[derive(Default)]
pub struct SigSession {
    bound: Option<Bound>,
    secret_key: SecretBuf,
}

impl SigSession {
    /// Create an uninitialized session. Call [`init`](Self::init) before any
    /// other operation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the session to `name` and optionally import a secret key. The
    /// imported key is retained verbatim; its length is only checked when a
    /// signing operation needs it.
    pub fn init(&mut self, name: &str, secret_key: Option<&[u8]>) -> Result<()> {
        let reg = registry();
        if !reg.is_enabled(AlgorithmFamily::Sig, name) {
            if reg.is_supported(AlgorithmFamily::Sig, name) {
                return Err(Error::DisabledAlgorithm(name.to_string()));
            }
            return Err(Error::UnsupportedAlgorithm(name.to_string()));
        }
        let scheme = backend::find(name)
            .and_then(backend::SigEntry::scheme)
            .ok_or_else(|| Error::UnsupportedAlgorithm(name.to_string()))?;

        self.clean();
        let details = SigDetails {
            name: name.to_string(),
            version: scheme.version().to_string(),
            claimed_nist_level: scheme.claimed_nist_level(),
            is_euf_cma: scheme.is_euf_cma(),
            length_public_key: scheme.public_key_len(),
            length_secret_key: scheme.secret_key_len(),
            max_length_signature: scheme.max_signature_len(),
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
    pub fn details(&self) -> Result<&SigDetails> {
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

    /// Sign `message` with the held secret key. The returned signature is at
    /// most `max_length_signature` bytes long.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let bound = self.bound()?;
        if self.secret_key.len() != bound.details.length_secret_key {
            return Err(Error::MissingOrInvalidSecretKey {
                expected: bound.details.length_secret_key,
                actual: self.secret_key.len(),
            });
        }
        bound.scheme.sign(message, self.secret_key.as_bytes())
    }

    /// Verify `signature` over `message` against `public_key`.
    ///
    /// Returns Ok(false) on a cryptographic mismatch; a false result is an
    /// expected outcome, not a fault. Errors are reserved for violated
    /// length and state contracts.
    pub fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        let bound = self.bound()?;
        if public_key.len() != bound.details.length_public_key {
            return Err(Error::InvalidPublicKeyLength {
                expected: bound.details.length_public_key,
                actual: public_key.len(),
            });
        }
        if signature.len() > bound.details.max_length_signature {
            return Err(Error::InvalidSignatureLength {
                max: bound.details.max_length_signature,
                actual: signature.len(),
            });
        }
        bound.scheme.verify(message, signature, public_key)
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

impl Drop for SigSession {
    fn drop(&mut self) {
        self.clean();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations_require_init() {
        let session = SigSession::new();
        assert!(matches!(session.details(), Err(Error::NotInitialized)));
        assert!(matches!(session.sign(b"msg"), Err(Error::NotInitialized)));
    }

    #[test]
    fn test_init_captures_details() -> Result<()> {
        let mut session = SigSession::new();
        session.init("Dilithium3", None)?;
        let details = session.details()?;
        assert_eq!(details.name, "Dilithium3");
        assert_eq!(details.claimed_nist_level, 3);
        assert!(details.is_euf_cma);
        Ok(())
    }

    #[test]
    fn test_sign_without_key_fails() -> Result<()> {
        let mut session = SigSession::new();
        session.init("Dilithium3", None)?;
        assert!(matches!(
            session.sign(b"msg"),
            Err(Error::MissingOrInvalidSecretKey { actual: 0, .. })
        ));
        Ok(())
    }
}
