#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Integer width
//!
//! Coordinates, curve coefficients and the modulus are `i64`. Products are
//! formed in `i128` and reduced right away, so every modulus in
//! `2..=i64::MAX` is supported without overflow. Scalars are `u64`.
//!
//! ## Validation
//!
//! Constructors do not check that the modulus is prime, that the curve is
//! non-singular or that points lie on the curve. Use [`Curve::validate`] and
//! [`Curve::check_point`] when inputs are not trusted.

#[cfg(test)]
extern crate std;

mod arithmetic;
mod error;

pub mod ecdh;
pub mod elgamal;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    arithmetic::{Curve, Point, extended_gcd, gcd, modulo},
    elgamal::Ciphertext,
    error::{Error, Result},
};
pub use rand_core;
