//! ElGamal encryption of curve points.
//!
//! A message is a point `M` on the curve. To encrypt for a peer holding
//! `Q = d·G`, pick an ephemeral scalar `k` and send
//!
//! ```text
//! C1 = k·G
//! C2 = M + k·Q
//! ```
//!
//! The peer recovers `M = C2 - d·C1`.
//!
//! ## Usage
#![cfg_attr(feature = "os_rng", doc = "```")]
#![cfg_attr(not(feature = "os_rng"), doc = "```ignore")]
//! use smallcurve::{Curve, Point, elgamal::ElGamal};
//! use rand_core::OsRng;
//!
//! let curve = Curve::new(14, 19, 3623)?;
//! let base_point = Point::new(6, 730);
//!
//! let alice = ElGamal::new(&curve, &base_point, 12);
//! let alice_public = alice.public_key()?;
//!
//! // Bob encrypts for Alice
//! let bob = ElGamal::new(&curve, &base_point, 32);
//! let message = Point::new(2149, 196);
//! let ciphertext = bob.encrypt(&mut OsRng, &message, &alice_public)?;
//!
//! // Alice decrypts
//! assert_eq!(alice.decrypt(&ciphertext)?, message);
//! # Ok::<(), smallcurve::Error>(())
//! ```

mod ephemeral;

pub use self::ephemeral::{EphemeralMode, FOLD_BUFFER_SIZE, fold_bytes};

use core::fmt;

use rand_core::TryCryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Curve, Point, Result};

/// ElGamal ciphertext: the pair of points `(C1, C2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    c1: Point,
    c2: Point,
}

impl Ciphertext {
    /// Assemble a ciphertext from its two points.
    pub const fn new(c1: Point, c2: Point) -> Self {
        Self { c1, c2 }
    }

    /// Get C1, the ephemeral public point `k·G`.
    pub const fn c1(&self) -> &Point {
        &self.c1
    }

    /// Get C2, the masked message `M + k·Q`.
    pub const fn c2(&self) -> &Point {
        &self.c2
    }
}

/// ElGamal key holder: a shared curve and base point together with this
/// party's secret scalar.
///
/// The same instance encrypts for peers and decrypts ciphertexts addressed
/// to its own public key.
pub struct ElGamal<'a> {
    curve: &'a Curve,
    base_point: &'a Point,
    secret: u64,
    mode: EphemeralMode,
}

impl<'a> ElGamal<'a> {
    /// Initialize an [`ElGamal`] instance using [`EphemeralMode::Folded`]
    /// ephemeral scalars.
    pub fn new(curve: &'a Curve, base_point: &'a Point, secret: u64) -> Self {
        Self::new_with_mode(curve, base_point, secret, EphemeralMode::Folded)
    }

    /// Initialize an [`ElGamal`] instance and set how ephemeral scalars are
    /// derived.
    pub fn new_with_mode(
        curve: &'a Curve,
        base_point: &'a Point,
        secret: u64,
        mode: EphemeralMode,
    ) -> Self {
        Self {
            curve,
            base_point,
            secret,
            mode,
        }
    }

    /// Ephemeral scalar derivation used by [`ElGamal::encrypt`].
    pub fn mode(&self) -> EphemeralMode {
        self.mode
    }

    /// Public point `secret·G`.
    pub fn public_key(&self) -> Result<Point> {
        self.curve.scalar_multiply(self.base_point, self.secret)
    }

    /// Encrypt `plaintext` for the holder of `peer_public`, drawing the
    /// ephemeral scalar from `rng`.
    ///
    /// A failing generator yields [`Error::Randomness`](crate::Error::Randomness)
    /// and no ciphertext.
    pub fn encrypt<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        plaintext: &Point,
        peer_public: &Point,
    ) -> Result<Ciphertext> {
        let mut k = self.mode.derive(rng)?;
        let ciphertext = self.encrypt_with_scalar(k, plaintext, peer_public);
        k.zeroize();
        ciphertext
    }

    /// Encrypt `plaintext` for the holder of `peer_public` with a
    /// caller-chosen ephemeral scalar `k`.
    ///
    /// # ⚠️ Warning
    ///
    /// Reusing `k` for two messages reveals their difference. Prefer
    /// [`ElGamal::encrypt`].
    pub fn encrypt_with_scalar(
        &self,
        k: u64,
        plaintext: &Point,
        peer_public: &Point,
    ) -> Result<Ciphertext> {
        let c1 = self.curve.scalar_multiply(self.base_point, k)?;
        let mask = self.curve.scalar_multiply(peer_public, k)?;
        let c2 = self.curve.add(plaintext, &mask)?;

        Ok(Ciphertext::new(c1, c2))
    }

    /// Recover the plaintext point `C2 - secret·C1`.
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<Point> {
        let shared = self.curve.scalar_multiply(&ciphertext.c1, self.secret)?;
        self.curve.subtract(&ciphertext.c2, &shared)
    }
}

impl fmt::Debug for ElGamal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElGamal")
            .field("curve", self.curve)
            .field("base_point", self.base_point)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Drop for ElGamal<'_> {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl ZeroizeOnDrop for ElGamal<'_> {}
