//! Points on the SM2 recommended curve `y^2 = x^3 + a*x + b (mod p)`.

use {
    crate::ecc::{
        field::{FieldElement, A, B},
        scalar::Scalar,
    },
    std::ops,
};

/// A point on the curve, possibly at infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point(Coordinates);

/// The affine coordinates of a [`Point`], or its distinguished infinity
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinates {
    Infinity,
    Finite(FieldElement, FieldElement),
}

/// Error indicating that a pair of coordinates does not lie on the curve.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("point is not on the SM2 curve")]
pub struct NotOnCurve;

impl Point {
    pub fn infinity() -> Self {
        Self(Coordinates::Infinity)
    }

    /// Build a point from affine coordinates, verifying that
    /// `y^2 = x^3 + a*x + b (mod p)`.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self, NotOnCurve> {
        let a = FieldElement::from_limbs_unchecked(A);
        let b = FieldElement::from_limbs_unchecked(B);
        if y * y == x * x * x + a * x + b {
            Ok(Self(Coordinates::Finite(x, y)))
        } else {
            Err(NotOnCurve)
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        self.0
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self.0, Coordinates::Infinity)
    }

    /// `x` coordinate, or `None` at infinity.
    pub fn x(&self) -> Option<FieldElement> {
        match self.0 {
            Coordinates::Infinity => None,
            Coordinates::Finite(x, _) => Some(x),
        }
    }

    pub fn y(&self) -> Option<FieldElement> {
        match self.0 {
            Coordinates::Infinity => None,
            Coordinates::Finite(_, y) => Some(y),
        }
    }

    /// Serialize as the uncompressed `X || Y` concatenation (64 bytes), with
    /// no `0x04` SEC1 tag. See spec.md §4.6 for why the tag is omitted.
    pub fn to_xy_bytes(&self) -> Option<[u8; 64]> {
        let (x, y) = match self.0 {
            Coordinates::Infinity => return None,
            Coordinates::Finite(x, y) => (x, y),
        };
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&x.to_be_bytes());
        out[32..].copy_from_slice(&y.to_be_bytes());
        Some(out)
    }

    /// Multiply the point by a scalar using double-and-add.
    pub fn mul(&self, n: Scalar) -> Self {
        let mut s = *self;
        let mut result = Self::infinity();
        for i in 0..Scalar::BITS {
            if n.get_bit(i) {
                result = result + s;
            }
            s = s + s;
        }
        result
    }

    /// Whether `n * self = O` (`TestPubKey`'s order check). Assumes the
    /// point is already known to be on the curve. `n` itself cannot be
    /// represented as a [`Scalar`] (it reduces to zero), so this multiplies
    /// directly against the raw limbs of the group order.
    pub fn has_order_n(&self) -> bool {
        use crate::ecc::{limbs, scalar::N};
        let mut s = *self;
        let mut result = Self::infinity();
        for i in 0..(limbs::DIGITS * limbs::Digit::BITS as usize) {
            if limbs::get_bit(N, i) {
                result = result + s;
            }
            s = s + s;
        }
        result.is_infinity()
    }
}

impl ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self.0, rhs.0) {
            (Coordinates::Infinity, other) | (other, Coordinates::Infinity) => Self(other),
            (Coordinates::Finite(x1, y1), Coordinates::Finite(x2, y2)) if x1 == x2 && y1 == y2 => {
                // Point doubling: lambda = (3x^2 + a) / 2y.
                let a = FieldElement::from_limbs_unchecked(A);
                let two = FieldElement::ONE + FieldElement::ONE;
                let three = two + FieldElement::ONE;
                let Some(inv) = (two * y1).inv() else {
                    return Self(Coordinates::Infinity);
                };
                let lambda = (three * x1 * x1 + a) * inv;
                let x = lambda * lambda - two * x1;
                Self(Coordinates::Finite(x, lambda * (x1 - x) - y1))
            }
            (Coordinates::Finite(x1, y1), Coordinates::Finite(x2, y2)) => {
                let Some(inv) = (x2 - x1).inv() else {
                    // x1 == x2, y1 == -y2: the points are inverses of each other.
                    return Self(Coordinates::Infinity);
                };
                let lambda = (y2 - y1) * inv;
                let x = lambda * lambda - x1 - x2;
                Self(Coordinates::Finite(x, lambda * (x1 - x) - y1))
            }
        }
    }
}

impl ops::Neg for Point {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self.0 {
            Coordinates::Infinity => self,
            Coordinates::Finite(x, y) => Self(Coordinates::Finite(x, -y)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecc::context::Sm2Context;

    #[test]
    fn generator_is_on_curve_and_has_order_n() {
        let ctx = Sm2Context::get();
        assert!(!ctx.g.is_infinity());
        assert!(ctx.g.has_order_n());
    }

    #[test]
    fn doubling_matches_addition() {
        let ctx = Sm2Context::get();
        let doubled = ctx.g + ctx.g;
        let scaled = ctx.g.mul(Scalar::from_be_bytes({
            let mut b = [0u8; 32];
            b[31] = 2;
            b
        }));
        assert_eq!(doubled, scaled);
    }

    #[test]
    fn point_plus_negation_is_infinity() {
        let ctx = Sm2Context::get();
        assert!((ctx.g + -ctx.g).is_infinity());
    }
}
