//! Content hashing for the dist manifest.

use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::BundleError;

/// SHA256 of a byte slice, hex-encoded.
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// SHA256 of a file's contents.
pub fn sha256_file(path: &Path) -> Result<String, BundleError> {
    let data = std::fs::read(path).map_err(|source| BundleError::io(path, source))?;
    Ok(sha256_bytes(&data))
}

/// Builds a stable fingerprint over a sequence of string components.
#[derive(Default)]
pub struct Fingerprint {
    hasher: Sha256,
}

impl Fingerprint {
    pub fn new() -> Self {
        Fingerprint::default()
    }

    pub fn update(&mut self, s: &str) -> &mut Self {
        self.hasher.update(s.as_bytes());
        // Separator so ("ab","c") and ("a","bc") differ
        self.hasher.update(b"\0");
        self
    }

    pub fn finish(self) -> String {
        hex::encode(self.hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_separator_sensitive() {
        let mut a = Fingerprint::new();
        a.update("button").update("utils");
        let mut b = Fingerprint::new();
        b.update("button").update("utils");
        assert_eq!(a.finish(), b.finish());

        let mut c = Fingerprint::new();
        c.update("buttonutils");
        let mut d = Fingerprint::new();
        d.update("button").update("utils");
        assert_ne!(c.finish(), d.finish());
    }

    #[test]
    fn sha256_bytes_matches_known_vector() {
        assert_eq!(
            sha256_bytes(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }
}
