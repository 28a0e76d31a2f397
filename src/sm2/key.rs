//! SM2 key pairs.

use crate::{
    ecc::{FieldElement, Point, Scalar, Sm2Context},
    Error,
};
use zeroize::Zeroize;

/// A private key: a scalar in `[1, n-2]`.
///
/// Implements [`zeroize::Zeroize`] via [`Scalar`]'s own impl; see
/// [`Scalar`]'s documentation for why clearing is explicit rather than
/// drop-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct PrivateKey(pub(crate) Scalar);

impl PrivateKey {
    /// Wrap a caller-supplied scalar as a private key.
    ///
    /// Per spec.md's design note, this crate never samples randomness
    /// internally: callers are responsible for generating `d` uniformly in
    /// `[1, n-2]` with a cryptographically secure RNG. `d = n-1` is
    /// rejected here rather than surfacing later as a signing failure: see
    /// [`Scalar::in_private_key_range`].
    pub fn from_scalar(d: Scalar) -> Result<Self, Error> {
        if !d.in_private_key_range() {
            return Err(Error::OutOfRangeR);
        }
        Ok(Self(d))
    }

    pub fn from_be_bytes(bytes: [u8; 32]) -> Result<Self, Error> {
        Self::from_scalar(Scalar::from_be_bytes(bytes))
    }

    pub fn to_be_bytes(self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    /// Derive the corresponding public key, `P = d * G`.
    pub fn public_key(self) -> PublicKey {
        let g = Sm2Context::get().g;
        PublicKey(g.mul(self.0))
    }

    pub(crate) fn scalar(self) -> Scalar {
        self.0
    }
}

/// A public key: a point on the curve, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(pub(crate) Point);

impl PublicKey {
    /// Validate an affine public key, per GB/T 32918.1 §6.2.1: not the point
    /// at infinity, on the curve, coordinates in `[0, p)`, and of order `n`.
    pub fn from_xy_bytes(x: [u8; 32], y: [u8; 32]) -> Result<Self, Error> {
        let point = Point::new(FieldElement::from_be_bytes(x), FieldElement::from_be_bytes(y))
            .map_err(|_| Error::PubKeyInit)?;
        Self::from_point(point)
    }

    pub(crate) fn from_point(point: Point) -> Result<Self, Error> {
        if point.is_infinity() {
            return Err(Error::PubKeyInit);
        }
        if !point.has_order_n() {
            return Err(Error::PubKeyInit);
        }
        Ok(Self(point))
    }

    pub fn point(self) -> Point {
        self.0
    }

    /// Raw `X || Y` encoding, no SEC1 tag (spec.md §4.6).
    pub fn to_xy_bytes(self) -> [u8; 64] {
        self.0.to_xy_bytes().expect("public keys are never infinite")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fixed_private_key() -> PrivateKey {
        let mut d = [0u8; 32];
        d[31] = 0x2a;
        PrivateKey::from_be_bytes(d).unwrap()
    }

    #[test]
    fn public_key_is_on_curve_and_validated() {
        let pk = fixed_private_key().public_key();
        let bytes = pk.to_xy_bytes();
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes[..32]);
        y.copy_from_slice(&bytes[32..]);
        let rebuilt = PublicKey::from_xy_bytes(x, y).unwrap();
        assert_eq!(rebuilt, pk);
    }

    #[test]
    fn zero_private_key_is_rejected() {
        assert!(PrivateKey::from_be_bytes([0u8; 32]).is_err());
    }
}
