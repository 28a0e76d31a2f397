//! The `Z` identity digest, GB/T 32918.2 §5.5: binds a signer's identity
//! and the curve parameters into the hash input for signing and
//! verification, so a signature cannot be replayed under a different
//! identity or curve.

use crate::{
    ecc::field::{A, B},
    ecc::Sm2Context,
    hash::Sm3,
    sm2::key::PublicKey,
    Error,
};

/// Default user identity from GB/T 32918.2 Annex A, used when an
/// application has no identity string of its own: the ASCII bytes
/// `"1234567812345678"`.
pub const DEFAULT_ID: &[u8] = b"1234567812345678";

/// Compute `Z_A = SM3(ENTL_A || ID_A || a || b || x_G || y_G || x_A || y_A)`.
///
/// `id` is the signer's distinguishing identifier; its bit length must fit
/// in the 16-bit `ENTL_A` field (i.e. at most 8191 bytes).
pub fn compute(id: &[u8], public_key: PublicKey) -> Result<[u8; 32], Error> {
    let entl = id
        .len()
        .checked_mul(8)
        .filter(|bits| *bits <= u16::MAX as usize)
        .ok_or(Error::IdentityTooLong)? as u16;

    let g = Sm2Context::get().g;
    let gx = g.x().expect("generator is never infinite");
    let gy = g.y().expect("generator is never infinite");
    let (px, py) = {
        let point = public_key.point();
        (
            point.x().expect("public keys are never infinite"),
            point.y().expect("public keys are never infinite"),
        )
    };

    let mut hasher = Sm3::new();
    hasher.update(&entl.to_be_bytes());
    hasher.update(id);
    hasher.update(&crate::ecc::FieldElement::from_limbs_unchecked(A).to_be_bytes());
    hasher.update(&crate::ecc::FieldElement::from_limbs_unchecked(B).to_be_bytes());
    hasher.update(&gx.to_be_bytes());
    hasher.update(&gy.to_be_bytes());
    hasher.update(&px.to_be_bytes());
    hasher.update(&py.to_be_bytes());
    Ok(hasher.finalize())
}
