/*!
KEM dispatch tables over the linked Kyber parameter sets.
*/

use once_cell::sync::Lazy;
use pqcrypto_traits::kem::{Ciphertext, PublicKey, SecretKey, SharedSecret};

use crate::error::{Error, Result};

use pqcrypto_kyber::kyber768;

#[cfg(feature = "kyber512")]
use pqcrypto_kyber::kyber512;

#[cfg(feature = "kyber1024")]
use pqcrypto_kyber::kyber1024;

/// One linked KEM implementation. All operations report binary
/// success/failure; the caller never sees backend-internal state.
pub(crate) trait KemScheme: Sync {
    fn version(&self) -> &'static str;
    fn claimed_nist_level(&self) -> u8;
    fn is_ind_cca(&self) -> bool {
        true
    }
    fn public_key_len(&self) -> usize;
    fn secret_key_len(&self) -> usize;
    fn ciphertext_len(&self) -> usize;
    fn shared_secret_len(&self) -> usize;

    /// Returns (public key, secret key).
    fn keypair(&self) -> Result<(Vec<u8>, Vec<u8>)>;

    /// Returns (ciphertext, shared secret).
    fn encapsulate(&self, public_key: &[u8]) -> Result<(Vec<u8>, Vec<u8>)>;

    fn decapsulate(&self, ciphertext: &[u8], secret_key: &[u8]) -> Result<Vec<u8>>;
}

macro_rules! kyber_scheme {
    ($scheme:ident, $module:ident, $level:expr) => {
        struct $scheme;

        impl KemScheme for $scheme {
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

            fn ciphertext_len(&self) -> usize {
                $module::ciphertext_bytes()
            }

            fn shared_secret_len(&self) -> usize {
                $module::shared_secret_bytes()
            }

            fn keypair(&self) -> Result<(Vec<u8>, Vec<u8>)> {
                let (pk, sk) = $module::keypair();
                Ok((pk.as_bytes().to_vec(), sk.as_bytes().to_vec()))
            }

            fn encapsulate(&self, public_key: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
                let pk = $module::PublicKey::from_bytes(public_key)
                    .map_err(|_| Error::EncapsulationFailed)?;
                let (ss, ct) = $module::encapsulate(&pk);
                Ok((ct.as_bytes().to_vec(), ss.as_bytes().to_vec()))
            }

            fn decapsulate(&self, ciphertext: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
                let ct = $module::Ciphertext::from_bytes(ciphertext)
                    .map_err(|_| Error::DecapsulationFailed)?;
                let sk = $module::SecretKey::from_bytes(secret_key)
                    .map_err(|_| Error::DecapsulationFailed)?;
                Ok($module::decapsulate(&ct, &sk).as_bytes().to_vec())
            }
        }
    };
}

kyber_scheme!(Kyber768, kyber768, 3);

#[cfg(feature = "kyber512")]
kyber_scheme!(Kyber512, kyber512, 1);

#[cfg(feature = "kyber1024")]
kyber_scheme!(Kyber1024, kyber1024, 5);

/// Catalog entry: a recognized KEM name, with the linked implementation if
/// this build carries one.
pub(crate) struct KemEntry {
    pub(crate) name: &'static str,
    scheme: Option<&'static dyn KemScheme>,
}

impl KemEntry {
    pub(crate) fn is_enabled(&self) -> bool {
        self.scheme.is_some()
    }

    pub(crate) fn scheme(&self) -> Option<&'static dyn KemScheme> {
        self.scheme
    }
}

fn kyber512_scheme() -> Option<&'static dyn KemScheme> {
    #[cfg(feature = "kyber512")]
    {
        Some(&Kyber512)
    }
    #[cfg(not(feature = "kyber512"))]
    {
        None
    }
}

fn kyber1024_scheme() -> Option<&'static dyn KemScheme> {
    #[cfg(feature = "kyber1024")]
    {
        Some(&Kyber1024)
    }
    #[cfg(not(feature = "kyber1024"))]
    {
        None
    }
}

/// Every KEM the binding knows about, in a stable order fixed at process
/// start. Entries without a scheme are recognized by name only.
pub(crate) static KEM_CATALOG: Lazy<Vec<KemEntry>> = Lazy::new(|| {
    let mut catalog = vec![
        KemEntry {
            name: "Kyber512",
            scheme: kyber512_scheme(),
        },
        KemEntry {
            name: "Kyber768",
            scheme: Some(&Kyber768),
        },
        KemEntry {
            name: "Kyber1024",
            scheme: kyber1024_scheme(),
        },
    ];
    for name in [
        "HQC-128",
        "HQC-192",
        "HQC-256",
        "Classic-McEliece-348864",
        "FrodoKEM-640-AES",
    ] {
        catalog.push(KemEntry { name, scheme: None });
    }
    catalog
});

pub(crate) fn find(name: &str) -> Option<&'static KemEntry> {
    KEM_CATALOG.iter().find(|entry| entry.name == name)
}
