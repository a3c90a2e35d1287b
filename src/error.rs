/*!
Error handling for the PQC binding.
*/

use std::io;
use thiserror::Error;

/// Result type for the PQC binding
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the PQC binding
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The algorithm name is unknown to the binding
    #[error("\"{0}\" is not supported")]
    UnsupportedAlgorithm(String),

    /// The algorithm is recognized but not linked into this build
    #[error("\"{0}\" is supported but not enabled in this build")]
    DisabledAlgorithm(String),

    /// Algorithm index past the end of the catalog
    #[error("algorithm index {index} out of range (max {max})")]
    OutOfRange { index: usize, max: usize },

    /// Session operation before a successful init
    #[error("session not initialized")]
    NotInitialized,

    /// Public key does not have the length the algorithm expects
    #[error("invalid public key length: expected {expected} bytes, got {actual}")]
    InvalidPublicKeyLength { expected: usize, actual: usize },

    /// Ciphertext does not have the length the algorithm expects
    #[error("invalid ciphertext length: expected {expected} bytes, got {actual}")]
    InvalidCiphertextLength { expected: usize, actual: usize },

    /// Signature longer than the algorithm's maximum
    #[error("invalid signature length: at most {max} bytes, got {actual}")]
    InvalidSignatureLength { max: usize, actual: usize },

    /// No secret key of the expected length is held; pass one to init or
    /// call generate_keypair first
    #[error("missing or invalid secret key: expected {expected} bytes, got {actual}")]
    MissingOrInvalidSecretKey { expected: usize, actual: usize },

    /// The backend reported failure during key generation
    #[error("key generation failed")]
    KeyGenerationFailed,

    /// The backend reported failure during encapsulation
    #[error("encapsulation failed")]
    EncapsulationFailed,

    /// The backend reported failure during decapsulation
    #[error("decapsulation failed")]
    DecapsulationFailed,

    /// The backend reported failure during signing
    #[error("signing failed")]
    SigningFailed,

    /// The stream ended before the expected number of bytes arrived
    #[error("incomplete read: expected {expected} bytes, got {read}")]
    IncompleteRead { expected: usize, read: usize },
}
