use std::io;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::TallyError;
use crate::serde::write_canonical_json;

/// Feeds written bytes straight into the digest.
struct DigestWriter(Sha256);

impl io::Write for DigestWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Hex sha256 of the canonical JSON encoding of `value`.
pub fn stable_hash_string<T: Serialize + ?Sized>(value: &T) -> Result<String, TallyError> {
    let mut writer = DigestWriter(Sha256::new());
    write_canonical_json(&mut writer, value)?;
    Ok(format!("{:x}", writer.0.finalize()))
}
