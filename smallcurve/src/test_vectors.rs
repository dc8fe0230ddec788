//! Reference curves and test vectors.

pub mod group;

use crate::{Curve, Point};

/// Curve `y² = x³ + 324x + 1287` over `F₃₈₅₁`, used for key agreement
/// vectors.
pub const DH_CURVE: Curve = curve(324, 1287, 3851);

/// Base point of [`DH_CURVE`]; it has order 1964.
pub const DH_BASE_POINT: Point = Point::new(920, 303);

/// Order of [`DH_BASE_POINT`].
pub const DH_BASE_ORDER: u64 = 1964;

/// Curve `y² = x³ + 14x + 19` over `F₃₆₂₃`, used for encryption vectors.
pub const ELGAMAL_CURVE: Curve = curve(14, 19, 3623);

/// Base point of [`ELGAMAL_CURVE`]; it has order 3566.
pub const ELGAMAL_BASE_POINT: Point = Point::new(6, 730);

/// Order of [`ELGAMAL_BASE_POINT`].
pub const ELGAMAL_BASE_ORDER: u64 = 3566;

/// A message point on [`ELGAMAL_CURVE`].
pub const ELGAMAL_MESSAGE: Point = Point::new(2149, 196);

const fn curve(a: i64, b: i64, p: i64) -> Curve {
    match Curve::new(a, b, p) {
        Ok(curve) => curve,
        Err(_) => panic!("modulus out of range"),
    }
}
