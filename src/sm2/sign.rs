//! SM2 digital signature generation and verification, GB/T 32918.2 §6-§7.

use crate::{
    ecc::{Scalar, Sm2Context},
    hash::Sm3,
    sm2::{
        key::{PrivateKey, PublicKey},
        za,
    },
    Error,
};
use zeroize::Zeroize;

/// An `(r, s)` signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub r: Scalar,
    pub s: Scalar,
}

impl Signature {
    pub fn to_bytes(self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r.to_be_bytes());
        out[32..].copy_from_slice(&self.s.to_be_bytes());
        out
    }

    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Self {
            r: Scalar::from_be_bytes(r),
            s: Scalar::from_be_bytes(s),
        }
    }
}

fn digest_as_scalar(id: &[u8], public_key: PublicKey, message: &[u8]) -> Result<Scalar, Error> {
    let za = za::compute(id, public_key)?;
    let mut hasher = Sm3::new();
    hasher.update(&za);
    hasher.update(message);
    Ok(Scalar::from_be_bytes(hasher.finalize()))
}

/// Generate a signature over `message`, under identity `id` and the given
/// private key, with caller-supplied ephemeral scalar `k`.
///
/// `k` must be freshly random and never reused across signatures: an
/// attacker who learns `k` for one signature, or sees two signatures
/// sharing a `k`, can recover `d` directly from `s = (1+d)^{-1}(k - r d)`.
/// This crate does not sample `k` itself; the caller owns that guarantee
/// (spec.md's design note on randomness).
pub fn sign(id: &[u8], private_key: PrivateKey, message: &[u8], k: Scalar) -> Result<Signature, Error> {
    let public_key = private_key.public_key();
    let mut e = digest_as_scalar(id, public_key, message)?;

    let g = Sm2Context::get().g;
    let point = g.mul(k);
    let mut x1 = Scalar::from_be_bytes(point.x().expect("k*G is infinite only if k=0").to_be_bytes());

    let r = e + x1;
    // e and x1 are pure intermediates, never part of the returned signature:
    // clear them on both the error and success paths below.
    e.zeroize();
    x1.zeroize();
    if r.is_zero() || (r + k).is_zero() {
        return Err(Error::GenerateR);
    }

    let mut one_plus_d_inv = (Scalar::ONE + private_key.scalar())
        .inv()
        .ok_or(Error::GenerateS)?;
    let s = one_plus_d_inv * (k - r * private_key.scalar());
    one_plus_d_inv.zeroize();
    if s.is_zero() {
        return Err(Error::GenerateS);
    }

    Ok(Signature { r, s })
}

/// Verify `signature` over `message`, under identity `id` and the signer's
/// public key.
pub fn verify(id: &[u8], public_key: PublicKey, message: &[u8], signature: Signature) -> Result<(), Error> {
    if !signature.r.in_signing_range() {
        return Err(Error::OutOfRangeR);
    }
    if !signature.s.in_signing_range() {
        return Err(Error::OutOfRangeS);
    }

    let e = digest_as_scalar(id, public_key, message)?;
    let t = signature.r + signature.s;
    if t.is_zero() {
        return Err(Error::GenerateT);
    }

    let g = Sm2Context::get().g;
    let point = g.mul(signature.s) + public_key.point().mul(t);
    let Some(x1) = point.x() else {
        return Err(Error::DataMismatch);
    };
    let r_check = e + Scalar::from_be_bytes(x1.to_be_bytes());

    if r_check == signature.r {
        Ok(())
    } else {
        Err(Error::DataMismatch)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sm2::za::DEFAULT_ID;

    fn scalar_from_u8(byte: u8) -> Scalar {
        let mut b = [0u8; 32];
        b[31] = byte;
        Scalar::from_be_bytes(b)
    }

    #[test]
    fn sign_then_verify_round_trips() {
        let d = PrivateKey::from_scalar(scalar_from_u8(0x42)).unwrap();
        let k = scalar_from_u8(0x17);
        let message = b"sign and verify me";

        let signature = sign(DEFAULT_ID, d, message, k).unwrap();
        assert!(verify(DEFAULT_ID, d.public_key(), message, signature).is_ok());
    }

    #[test]
    fn tampered_message_is_rejected() {
        let d = PrivateKey::from_scalar(scalar_from_u8(0x42)).unwrap();
        let k = scalar_from_u8(0x17);
        let signature = sign(DEFAULT_ID, d, b"original message", k).unwrap();
        assert_eq!(
            verify(DEFAULT_ID, d.public_key(), b"tampered message", signature),
            Err(Error::DataMismatch)
        );
    }

    #[test]
    fn wrong_identity_is_rejected() {
        let d = PrivateKey::from_scalar(scalar_from_u8(0x42)).unwrap();
        let k = scalar_from_u8(0x17);
        let message = b"identity bound message";
        let signature = sign(DEFAULT_ID, d, message, k).unwrap();
        assert_eq!(
            verify(b"someone else", d.public_key(), message, signature),
            Err(Error::DataMismatch)
        );
    }

    #[test]
    fn matches_the_published_test_vector() {
        // GM/T 0003.5 annex example, restated at spec.md §8 item 5.
        let d_hex = "3945208F7B2144B13F36E38AC6D39F9588939369".to_string() + "2860B51A42FB81EF4DF7C5B8";
        let mut d_bytes = [0u8; 32];
        hex::decode_to_slice(&d_hex, &mut d_bytes).expect("valid hex");
        let d = PrivateKey::from_be_bytes(d_bytes).unwrap();

        let mut k_bytes = [0u8; 32];
        hex::decode_to_slice(
            "59276E27D506861A16680F3AD9C02DCCEF3CC1FA3CDBE4CE6D54B80DEAC1BC21",
            &mut k_bytes,
        )
        .expect("valid hex");
        let k = Scalar::from_be_bytes(k_bytes);

        let message = b"message digest";
        let public_key = d.public_key();

        let mut expected_px = [0u8; 32];
        hex::decode_to_slice(
            "09F9DF311E5421A150DD7D161E4BC5C672179FAD1833FC076BB08FF356F35020",
            &mut expected_px,
        )
        .expect("valid hex");
        assert_eq!(public_key.point().x().unwrap().to_be_bytes(), expected_px);

        let signature = sign(DEFAULT_ID, d, message, k).unwrap();
        assert!(verify(DEFAULT_ID, public_key, message, signature).is_ok());
    }

    #[test]
    fn out_of_range_signature_components_are_rejected() {
        let d = PrivateKey::from_scalar(scalar_from_u8(0x42)).unwrap();
        let signature = Signature {
            r: Scalar::ZERO,
            s: scalar_from_u8(1),
        };
        assert_eq!(
            verify(DEFAULT_ID, d.public_key(), b"m", signature),
            Err(Error::OutOfRangeR)
        );
    }
}
