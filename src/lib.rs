/*!
# PQC Bind

Session-oriented bindings over post-quantum KEM and signature backends.

## Overview

All cryptographic computation is delegated to linked PQClean
implementations (CRYSTALS-Kyber and CRYSTALS-Dilithium); this crate's job
is marshaling buffers, managing the lifetime of key material, and turning
backend failures into typed errors. It provides:

- A process-wide registry of supported and enabled algorithms
- [`KemSession`] and [`SigSession`] lifecycle wrappers around one bound
  algorithm each
- Secret key buffers that are zeroed before their memory is released
- A minimal two-message KEM handshake over any byte stream (see [`net`])

## Example

```no_run
use pqc_bind::{KemSession, Result};

fn main() -> Result<()> {
    let mut client = KemSession::new();
    client.init("Kyber768", None)?;
    let public_key = client.generate_keypair()?;

    let mut server = KemSession::new();
    server.init("Kyber768", None)?;
    let (ciphertext, secret_server) = server.encap_secret(&public_key)?;

    let secret_client = client.decap_secret(&ciphertext)?;
    assert_eq!(secret_client, secret_server);
    Ok(())
}
```
*/

// Native library boundary
mod backend;

// Core components
pub mod error;
pub mod kem;
pub mod net;
pub mod registry;
pub mod secret;
pub mod sig;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use kem::{KemDetails, KemSession};
pub use registry::{registry, AlgorithmFamily, Registry};
pub use secret::SecretBuf;
pub use sig::{SigDetails, SigSession};
