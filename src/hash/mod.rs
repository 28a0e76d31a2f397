mod merkledamgard;
pub mod sm3;

pub use sm3::{sm3, Sm3};

/// Key derivation function built over [SM3](sm3), GB/T 32918.4 §5.4.3.
///
/// Produces `klen` bytes as `SM3(Z || ct)` for `ct = 1, 2, ...` (32-bit
/// big-endian counters), truncated to `klen` bytes.
pub fn kdf(z: &[u8], klen: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(klen);
    let mut ct: u32 = 1;
    while out.len() < klen {
        let mut h = Sm3::new();
        h.update(z);
        h.update(&ct.to_be_bytes());
        out.extend_from_slice(&h.finalize());
        ct += 1;
    }
    out.truncate(klen);
    out
}

/// Whether a KDF output is degenerately all-zero, per spec.md §4.1 ("fails
/// if the resulting stream is all zero").
pub fn is_all_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| *b == 0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kdf_produces_requested_length() {
        assert_eq!(kdf(b"seed", 19).len(), 19);
        assert_eq!(kdf(b"seed", 64).len(), 64);
    }

    #[test]
    fn kdf_is_deterministic() {
        assert_eq!(kdf(b"seed", 40), kdf(b"seed", 40));
    }
}
