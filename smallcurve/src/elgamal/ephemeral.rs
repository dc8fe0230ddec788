//! Ephemeral scalar derivation for encryption.

use rand_core::TryCryptoRng;
use zeroize::Zeroize;

use crate::{Error, Result};

/// Number of random bytes folded into a [`EphemeralMode::Folded`] scalar.
pub const FOLD_BUFFER_SIZE: usize = 1024;

/// Strategy for deriving the one-time scalar `k` of an encryption.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EphemeralMode {
    /// Read [`FOLD_BUFFER_SIZE`] random bytes and reduce them with
    /// [`fold_bytes`].
    ///
    /// # ⚠️ Warning
    ///
    /// The resulting scalar is below 2¹⁶, heavily biased and may be zero,
    /// so ciphertexts produced this way can be decrypted by brute force.
    /// It exists for compatibility with existing ciphertexts and exercises.
    #[default]
    Folded,

    /// Uniformly distributed scalar in `[1, order - 1]`, obtained by
    /// rejection sampling.
    ///
    /// `order` should be the order of the base point, e.g. as computed by
    /// [`Curve::order_of`](crate::Curve::order_of).
    Uniform {
        /// Order of the base point.
        order: u64,
    },
}

impl EphemeralMode {
    /// Draw a fresh ephemeral scalar from `rng`.
    ///
    /// Returns [`Error::Randomness`] if the generator fails and
    /// [`Error::InvalidOrder`] for a [`EphemeralMode::Uniform`] order below 2.
    pub fn derive<R: TryCryptoRng + ?Sized>(&self, rng: &mut R) -> Result<u64> {
        match *self {
            EphemeralMode::Folded => {
                let mut bytes = [0u8; FOLD_BUFFER_SIZE];
                rng.try_fill_bytes(&mut bytes)
                    .map_err(|_| Error::Randomness)?;

                let k = fold_bytes(&bytes);
                bytes.zeroize();
                Ok(k)
            }
            EphemeralMode::Uniform { order } => uniform(rng, order),
        }
    }
}

/// Fold a byte buffer into a scalar below 2¹⁶.
///
/// The bytes are decoded as UTF-8, with every maximal invalid subsequence
/// replaced by U+FFFD, and the UTF-16 code units of the decoded text are
/// XOR-ed together.
pub fn fold_bytes(bytes: &[u8]) -> u64 {
    let mut k = 0u16;

    for chunk in bytes.utf8_chunks() {
        for unit in chunk.valid().encode_utf16() {
            k ^= unit;
        }

        if !chunk.invalid().is_empty() {
            k ^= char::REPLACEMENT_CHARACTER as u16;
        }
    }

    k.into()
}

fn uniform<R: TryCryptoRng + ?Sized>(rng: &mut R, order: u64) -> Result<u64> {
    if order < 2 {
        return Err(Error::InvalidOrder);
    }

    let mask = u64::MAX >> (order - 1).leading_zeros();

    loop {
        let k = rng.try_next_u64().map_err(|_| Error::Randomness)? & mask;

        if k != 0 && k < order {
            return Ok(k);
        }
    }
}
