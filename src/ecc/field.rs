//! Prime field arithmetic for the SM2 recommended curve, i.e. arithmetic
//! modulo the field prime `p` from GB/T 32918.5.

use {
    crate::ecc::limbs::{self, Limbs},
    docext::docext,
    std::{cmp, ops},
    zeroize::Zeroize,
};

/// The field prime `p`, big-endian hex:
/// `FFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF 00000000 FFFFFFFF FFFFFFFF`.
pub const P: Limbs = [
    0xffffffffffffffff,
    0xffffffff00000000,
    0xffffffffffffffff,
    0xfffffffeffffffff,
];

/// The curve coefficient `a`.
pub const A: Limbs = [
    0xfffffffffffffffc,
    0xffffffff00000000,
    0xffffffffffffffff,
    0xfffffffeffffffff,
];

/// The curve coefficient `b`.
pub const B: Limbs = [
    0xddbcbd414d940e93,
    0xf39789f515ab8f92,
    0x4d5a9e4bcf6509a7,
    0x28e9fa9e9d9f5e34,
];

/// An element of the prime field `GF(p)`, i.e. a value in `[0, p)`.
///
/// Numbers are stored least-significant-digit first; every public
/// constructor reduces its input modulo [`P`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct FieldElement(Limbs);

impl FieldElement {
    pub const ZERO: Self = Self(limbs::ZERO);
    pub const ONE: Self = Self(limbs::ONE);

    /// Reduce a big-endian 32-byte string modulo `p`.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(limbs::reduce(limbs::from_be_bytes(bytes), P))
    }

    /// Build from limbs already known to be reduced modulo `p`. Only used
    /// internally for the fixed curve constants.
    pub(crate) const fn from_limbs_unchecked(limbs: Limbs) -> Self {
        Self(limbs)
    }

    pub fn to_be_bytes(self) -> [u8; 32] {
        limbs::to_be_bytes(self.0)
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Get the multiplicative inverse of the element using the extended
    /// Euclidean algorithm, or `None` if the element is zero.
    ///
    /// See [`crate::ecc::scalar::Scalar::inv`] for the derivation; the
    /// algorithm is identical, only the modulus differs.
    #[docext]
    #[must_use]
    pub fn inv(self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let mut u = self.0;
        let mut v = P;
        let mut x1 = Self::ONE;
        let mut x2 = Self::ZERO;
        while u != limbs::ZERO {
            let (q, r) = limbs::div(v, u);
            v = u;
            u = r.0;
            let x = x2 - Self(q) * x1;
            x2 = x1;
            x1 = x;
        }
        Some(x2)
    }
}

impl ops::Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(limbs::add_mod(self.0, rhs.0, P))
    }
}

impl ops::Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(limbs::sub_mod(self.0, rhs.0, P))
    }
}

impl ops::Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(limbs::mul_mod(self.0, rhs.0, P))
    }
}

impl ops::Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::ZERO - self
    }
}

impl cmp::PartialOrd for FieldElement {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl cmp::Ord for FieldElement {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        limbs::cmp(self.0, other.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn inverse_roundtrip() {
        let x = FieldElement::from_be_bytes({
            let mut b = [0u8; 32];
            b[31] = 7;
            b
        });
        let inv = x.inv().unwrap();
        assert_eq!(x * inv, FieldElement::ONE);
    }

    #[test]
    fn zero_has_no_inverse() {
        assert!(FieldElement::ZERO.inv().is_none());
    }

    #[test]
    fn add_sub_roundtrip() {
        let a = FieldElement::from_be_bytes([1; 32]);
        let b = FieldElement::from_be_bytes([2; 32]);
        assert_eq!((a + b) - b, a);
    }
}
