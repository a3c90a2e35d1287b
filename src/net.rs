/*!
Minimal KEM handshake over a byte stream.

Two messages on top of any `Read + Write` transport, typically TCP:

1. the responder writes the KEM name terminated by a newline;
2. the initiator sends its raw public key, exactly
   `length_public_key` bytes, no framing;
3. the responder answers with exactly `length_ciphertext` raw bytes;
4. both sides now hold the same shared secret.

The algorithm is dictated by the responder; there is no negotiation, no
retry, and no framing beyond the exact byte counts. A stalled peer blocks
the calling thread, so production use needs deadlines on the transport.
*/

use std::io::{self, Read, Write};

use crate::error::{Error, Result};
use crate::kem::{KemDetails, KemSession};

const MAX_NAME_LEN: usize = 128;

/// Fill `buf` completely, so a short read surfaces as `IncompleteRead`
/// with the byte counts.
fn read_full<S: Read>(stream: &mut S, buf: &mut [u8]) -> Result<()> {
    let mut read = 0;
    while read < buf.len() {
        let n = stream.read(&mut buf[read..])?;
        if n == 0 {
            return Err(Error::IncompleteRead {
                expected: buf.len(),
                read,
            });
        }
        read += n;
    }
    Ok(())
}

/// Read one newline-terminated algorithm name, without the newline.
fn read_name_line<S: Read>(stream: &mut S) -> Result<String> {
    let mut name = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        let n = stream.read(&mut byte)?;
        if n == 0 {
            return Err(Error::IncompleteRead {
                expected: name.len() + 1,
                read: name.len(),
            });
        }
        if byte[0] == b'\n' {
            break;
        }
        name.push(byte[0]);
        if name.len() > MAX_NAME_LEN {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "algorithm name line too long",
            )
            .into());
        }
    }
    String::from_utf8(name)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "algorithm name not UTF-8").into())
}

/// Responder half of the handshake.
///
/// Dictates `kem_name` to the peer, reads the peer's public key,
/// encapsulates against it and sends the ciphertext back. Returns the
/// shared secret.
pub fn respond<S: Read + Write>(stream: &mut S, kem_name: &str) -> Result<Vec<u8>> {
    stream.write_all(kem_name.as_bytes())?;
    stream.write_all(b"\n")?;

    let mut session = KemSession::new();
    session.init(kem_name, None)?;
    let details = session.details()?.clone();
    log::debug!("responder offered {}", details.name);

    let mut public_key = vec![0u8; details.length_public_key];
    read_full(stream, &mut public_key)?;

    let (ciphertext, shared_secret) = session.encap_secret(&public_key)?;
    stream.write_all(&ciphertext)?;
    log::debug!(
        "responder encapsulated a {}-byte secret with {}",
        shared_secret.len(),
        details.name
    );
    Ok(shared_secret)
}

/// Initiator half of the handshake.
///
/// Learns the KEM from the peer, sends a fresh public key, and
/// decapsulates the returned ciphertext. Returns the algorithm details and
/// the shared secret.
pub fn initiate<S: Read + Write>(stream: &mut S) -> Result<(KemDetails, Vec<u8>)> {
    let kem_name = read_name_line(stream)?;
    log::debug!("initiator received KEM name {:?}", kem_name);

    let mut session = KemSession::new();
    session.init(&kem_name, None)?;
    let public_key = session.generate_keypair()?;
    stream.write_all(&public_key)?;

    let details = session.details()?.clone();
    let mut ciphertext = vec![0u8; details.length_ciphertext];
    read_full(stream, &mut ciphertext)?;

    let shared_secret = session.decap_secret(&ciphertext)?;
    log::debug!(
        "initiator decapsulated a {}-byte secret with {}",
        shared_secret.len(),
        details.name
    );
    Ok((details, shared_secret))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_full_reports_short_reads() {
        let mut stream = Cursor::new(vec![1u8, 2, 3]);
        let mut buf = [0u8; 8];
        let result = read_full(&mut stream, &mut buf);
        assert!(matches!(
            result,
            Err(Error::IncompleteRead {
                expected: 8,
                read: 3
            })
        ));
    }

    #[test]
    fn test_read_name_line_stops_at_newline() -> Result<()> {
        let mut stream = Cursor::new(b"Kyber512\nleftover".to_vec());
        assert_eq!(read_name_line(&mut stream)?, "Kyber512");
        Ok(())
    }

    #[test]
    fn test_read_name_line_rejects_unterminated_input() {
        let mut stream = Cursor::new(b"Kyber512".to_vec());
        assert!(matches!(
            read_name_line(&mut stream),
            Err(Error::IncompleteRead { .. })
        ));
    }

    #[test]
    fn test_read_name_line_bounds_length() {
        let mut stream = Cursor::new(vec![b'x'; MAX_NAME_LEN + 10]);
        assert!(matches!(read_name_line(&mut stream), Err(Error::Io(_))));
    }
}
