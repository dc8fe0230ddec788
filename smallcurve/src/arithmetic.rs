//! Pure Rust implementation of group operations on short Weierstrass curves
//! over small prime fields.
//!
//! All arithmetic is affine and variable-time.

pub(crate) mod curve;
pub(crate) mod point;
pub(crate) mod util;

pub use self::{
    curve::Curve,
    point::Point,
    util::{extended_gcd, gcd, modulo},
};
