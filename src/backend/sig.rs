/*!
Signature dispatch tables over the linked Dilithium parameter sets.
*/

use once_cell::sync::Lazy;
use pqcrypto_traits::sign::{DetachedSignature, PublicKey, SecretKey};

use crate::error::{Error, Result};

use pqcrypto_dilithium::dilithium3;

#[cfg(feature = "dilithium2")]
use pqcrypto_dilithium::dilithium2;

#[cfg(feature = "dilithium5")]
use pqcrypto_dilithium::dilithium5;

/// One linked signature implementation.
pub(crate) trait SigScheme: Sync {
    fn version(&self) -> &'static str;
    fn claimed_nist_level(&self) -> u8;
    fn is_euf_cma(&self) -> bool {
        true
    }
    fn public_key_len(&self) -> usize;
    fn secret_key_len(&self) -> usize;
    fn max_signature_len(&self) -> usize;

    /// Returns (public key, secret key).
    fn keypair(&self) -> Result<(Vec<u8>, Vec<u8>)>;

    fn sign(&self, message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>>;

    /// Ok(false) covers both a cryptographic mismatch and a signature the
    /// backend cannot parse; neither is a fault.
    fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool>;
}

macro_rules! dilithium_scheme {
    ($scheme:ident, $module:ident, $level:expr) => {
        struct $scheme;

        impl SigScheme for $scheme {
            fn version(&self) -> &'static str {
                "PQClean round 3"
            }

            fn claimed_nist_level(&self) -> u8 {
                $level
            }

            fn public_key_len(&self) -> usize {
                $module::public_key_bytes()
            }

            fn secret_key_len(&self) -> usize {
                $module::secret_key_bytes()
            }

            fn max_signature_len(&self) -> usize {
                $module::signature_bytes()
            }

            fn keypair(&self) -> Result<(Vec<u8>, Vec<u8>)> {
                let (pk, sk) = $module::keypair();
                Ok((pk.as_bytes().to_vec(), sk.as_bytes().to_vec()))
            }

            fn sign(&self, message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
                let sk = $module::SecretKey::from_bytes(secret_key)
                    .map_err(|_| Error::SigningFailed)?;
                let signature = $module::detached_sign(message, &sk);
                Ok(signature.as_bytes().to_vec())
            }

            fn verify(
                &self,
                message: &[u8],
                signature: &[u8],
                public_key: &[u8],
            ) -> Result<bool> {
                let pk = match $module::PublicKey::from_bytes(public_key) {
                    Ok(pk) => pk,
                    Err(_) => return Ok(false),
                };
                let sig = match $module::DetachedSignature::from_bytes(signature) {
                    Ok(sig) => sig,
                    Err(_) => return Ok(false),
                };
                Ok($module::verify_detached_signature(&sig, message, &pk).is_ok())
            }
        }
    };
}

dilithium_scheme!(Dilithium3, dilithium3, 3);

#[cfg(feature = "dilithium2")]
dilithium_scheme!(Dilithium2, dilithium2, 2);

#[cfg(feature = "dilithium5")]
dilithium_scheme!(Dilithium5, dilithium5, 5);

/// Catalog entry: a recognized signature scheme name, with the linked
/// implementation if this build carries one.
pub(crate) struct SigEntry {
    pub(crate) name: &'static str,
    scheme: Option<&'static dyn SigScheme>,
}

impl SigEntry {
    pub(crate) fn is_enabled(&self) -> bool {
        self.scheme.is_some()
    }

    pub(crate) fn scheme(&self) -> Option<&'static dyn SigScheme> {
        self.scheme
    }
}

fn dilithium2_scheme() -> Option<&'static dyn SigScheme> {
    #[cfg(feature = "dilithium2")]
    {
        Some(&Dilithium2)
    }
    #[cfg(not(feature = "dilithium2"))]
    {
        None
    }
}

fn dilithium5_scheme() -> Option<&'static dyn SigScheme> {
    #[cfg(feature = "dilithium5")]
    {
        Some(&Dilithium5)
    }
    #[cfg(not(feature = "dilithium5"))]
    {
        None
    }
}

/// Every signature scheme the binding knows about, in a stable order fixed
/// at process start.
pub(crate) static SIG_CATALOG: Lazy<Vec<SigEntry>> = Lazy::new(|| {
    let mut catalog = vec![
        SigEntry {
            name: "Dilithium2",
            scheme: dilithium2_scheme(),
        },
        SigEntry {
            name: "Dilithium3",
            scheme: Some(&Dilithium3),
        },
        SigEntry {
            name: "Dilithium5",
            scheme: dilithium5_scheme(),
        },
    ];
    for name in ["Falcon-512", "Falcon-1024", "SPHINCS+-SHA2-128f-simple"] {
        catalog.push(SigEntry { name, scheme: None });
    }
    catalog
});

pub(crate) fn find(name: &str) -> Option<&'static SigEntry> {
    SIG_CATALOG.iter().find(|entry| entry.name == name)
}
