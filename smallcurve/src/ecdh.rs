//! Elliptic Curve Diffie-Hellman key agreement.
//!
//! Each party picks a secret scalar, publishes `secret·G` for a base point
//! `G` both parties agreed upon, and multiplies the peer's published point
//! by its own secret. Both sides arrive at `(a·b)·G`.
//!
//! ## Usage
//!
//! ```
//! use smallcurve::{Curve, Point, ecdh::DiffieHellman};
//!
//! let curve = Curve::new(324, 1287, 3851)?;
//! let base_point = Point::new(920, 303);
//!
//! // Alice
//! let alice = DiffieHellman::new(&curve, &base_point, 1194);
//! let alice_public = alice.public_key()?;
//!
//! // Bob
//! let bob = DiffieHellman::new(&curve, &base_point, 1759);
//! let bob_public = bob.public_key()?;
//!
//! // Both participants arrive on the same shared secret
//! assert_eq!(
//!     alice.shared_secret(&bob_public)?,
//!     bob.shared_secret(&alice_public)?
//! );
//! # Ok::<(), smallcurve::Error>(())
//! ```

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Curve, Point, Result};

/// One party's side of a Diffie-Hellman exchange: a shared curve and base
/// point together with this party's secret scalar.
///
/// The secret is not checked against the order of the base point.
pub struct DiffieHellman<'a> {
    curve: &'a Curve,
    base_point: &'a Point,
    secret: u64,
}

impl<'a> DiffieHellman<'a> {
    /// Initialize a key agreement over `curve` with generator `base_point`.
    pub fn new(curve: &'a Curve, base_point: &'a Point, secret: u64) -> Self {
        Self {
            curve,
            base_point,
            secret,
        }
    }

    /// Curve this key agreement runs over.
    pub fn curve(&self) -> &Curve {
        self.curve
    }

    /// Base point shared by all parties.
    pub fn base_point(&self) -> &Point {
        self.base_point
    }

    /// Public point `secret·G` to hand to the peer.
    pub fn public_key(&self) -> Result<Point> {
        self.curve.scalar_multiply(self.base_point, self.secret)
    }

    /// Shared secret point `secret·peer_public`.
    pub fn shared_secret(&self, peer_public: &Point) -> Result<Point> {
        self.curve.scalar_multiply(peer_public, self.secret)
    }
}

impl fmt::Debug for DiffieHellman<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffieHellman")
            .field("curve", self.curve)
            .field("base_point", self.base_point)
            .finish_non_exhaustive()
    }
}

impl Drop for DiffieHellman<'_> {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl ZeroizeOnDrop for DiffieHellman<'_> {}
