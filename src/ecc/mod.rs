//! The 256-bit prime-field/curve backend underlying SM2: digit arithmetic,
//! field and scalar types, and affine curve points.

pub mod context;
pub mod field;
pub(crate) mod limbs;
pub mod point;
pub mod scalar;

pub use {
    context::Sm2Context,
    field::FieldElement,
    point::{Coordinates, NotOnCurve, Point},
    scalar::Scalar,
};
