/*!
Container for private key material.

The disposal contract is part of correctness: every byte is overwritten with
zero before the backing memory is released, on every path out, including
panics unwinding through a session.
*/

use std::fmt;

use zeroize::Zeroize;

/// Owned byte buffer holding a secret key.
#[derive(Default)]
pub struct SecretBuf {
    bytes: Vec<u8>,
}

impl SecretBuf {
    /// Empty buffer, no allocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `bytes` into a fresh buffer.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Wipe the current contents and take ownership of `bytes` instead.
    pub(crate) fn replace(&mut self, bytes: Vec<u8>) {
        self.wipe();
        self.bytes = bytes;
    }

    /// Overwrite every byte with zero, in place. The length is preserved, so
    /// the cleared region stays observable.
    pub fn wipe(&mut self) {
        self.bytes.as_mut_slice().zeroize();
    }

    /// Wipe, then empty the buffer.
    pub(crate) fn clear(&mut self) {
        self.wipe();
        self.bytes.clear();
    }
}

impl Drop for SecretBuf {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl fmt::Debug for SecretBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuf({} bytes)", self.bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wipe_zeroes_in_place() {
        let mut buf = SecretBuf::from_bytes(&[0xAA; 64]);
        buf.wipe();
        assert_eq!(buf.len(), 64);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clear_empties_after_wiping() {
        let mut buf = SecretBuf::from_bytes(&[0x55; 32]);
        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_replace_takes_new_contents() {
        let mut buf = SecretBuf::from_bytes(&[1, 2, 3]);
        buf.replace(vec![4, 5, 6, 7]);
        assert_eq!(buf.as_bytes(), &[4, 5, 6, 7]);
    }

    #[test]
    fn test_debug_hides_contents() {
        let buf = SecretBuf::from_bytes(&[0xAB; 16]);
        let printed = format!("{:?}", buf);
        assert!(!printed.contains("AB"));
        assert!(!printed.contains("171"));
    }
}
