//! Short Weierstrass curves over prime fields and their group law.

use super::{
    point::Point,
    util::{extended_gcd, gcd, is_prime, modulo},
};
use crate::{Error, Result};

/// Elliptic curve `y² = x³ + ax + b` over the field of integers modulo `p`.
///
/// The curve is expected to be non-singular (`4a³ + 27b² ≢ 0 (mod p)`) and
/// `p` is expected to be prime. Neither is checked when constructing a
/// curve; see [`Curve::validate`].
///
/// Field elements are `i64` values and every product is formed in `i128`
/// before being reduced, so arithmetic cannot overflow for any supported
/// modulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Curve {
    a: i64,
    b: i64,
    p: i64,
}

impl Curve {
    /// Create the curve `y² = x³ + ax + b (mod p)`.
    ///
    /// Returns [`Error::Modulus`] if `p < 2`.
    pub const fn new(a: i64, b: i64, p: i64) -> Result<Self> {
        if p < 2 {
            return Err(Error::Modulus);
        }

        Ok(Self {
            a: modulo(a as i128, p as i128) as i64,
            b: modulo(b as i128, p as i128) as i64,
            p,
        })
    }

    /// Coefficient `a` in the curve equation, reduced modulo `p`.
    pub const fn a(&self) -> i64 {
        self.a
    }

    /// Coefficient `b` in the curve equation, reduced modulo `p`.
    pub const fn b(&self) -> i64 {
        self.b
    }

    /// Field modulus `p`.
    pub const fn modulus(&self) -> i64 {
        self.p
    }

    /// Reduce `value` into `[0, p)`.
    pub const fn reduce(&self, value: i128) -> i64 {
        modulo(value, self.p as i128) as i64
    }

    /// Computes `x` in `[0, p)` such that `a / b ≡ x (mod p)`.
    ///
    /// Returns [`Error::NotInvertible`] when `gcd(b, p) ≠ 1`, which includes
    /// `b ≡ 0`.
    pub fn div_mod(&self, a: i64, b: i64) -> Result<i64> {
        let p = i128::from(self.p);
        let b = modulo(b.into(), p);

        if gcd(b, p) != 1 {
            return Err(Error::NotInvertible);
        }

        let (inverse, _) = extended_gcd(b, p);
        Ok(self.fe_mul(self.reduce(a.into()), self.reduce(inverse)))
    }

    /// Multiplicative inverse of `b` modulo `p`.
    pub fn invert(&self, b: i64) -> Result<i64> {
        self.div_mod(1, b)
    }

    /// Does `point` satisfy the curve equation?
    ///
    /// The point at infinity belongs to every curve group and is reported as
    /// contained.
    pub fn contains(&self, point: &Point) -> bool {
        match self.affine(point) {
            Some((x, y)) => self.fe_mul(y, y) == self.rhs(x),
            None => true,
        }
    }

    /// Returns `-point`, i.e. `(x, -y mod p)`.
    pub fn negate(&self, point: &Point) -> Point {
        match self.affine(point) {
            Some((x, y)) => Point::new(x, self.fe_sub(0, y)),
            None => Point::IDENTITY,
        }
    }

    /// Returns `lhs + rhs` under the elliptic curve group law.
    ///
    /// Points which are each other's negation sum to the identity without
    /// any division taking place. For off-curve inputs sharing an
    /// x-coordinate the slope is undefined and [`Error::NotInvertible`] is
    /// returned.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        let Some((x1, y1)) = self.affine(lhs) else {
            return Ok(*rhs);
        };
        let Some((x2, y2)) = self.affine(rhs) else {
            return Ok(*lhs);
        };

        if x1 == x2 && self.fe_add(y1, y2) == 0 {
            return Ok(Point::IDENTITY);
        }

        let lambda = if x1 == x2 && y1 == y2 {
            // (3x² + a) / 2y
            let numerator = self.fe_add(self.fe_mul(3, self.fe_mul(x1, x1)), self.a);
            self.div_mod(numerator, self.fe_add(y1, y1))?
        } else {
            self.div_mod(self.fe_sub(y2, y1), self.fe_sub(x2, x1))?
        };

        let x3 = self.fe_sub(self.fe_sub(self.fe_mul(lambda, lambda), x1), x2);
        let y3 = self.fe_sub(self.fe_mul(lambda, self.fe_sub(x1, x3)), y1);

        Ok(Point::new(x3, y3))
    }

    /// Returns `point + point`.
    pub fn double(&self, point: &Point) -> Result<Point> {
        self.add(point, point)
    }

    /// Returns `lhs - rhs`.
    pub fn subtract(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        self.add(lhs, &self.negate(rhs))
    }

    /// Returns `n·point` using the double-and-add method, scanning `n` from
    /// its least significant bit.
    pub fn scalar_multiply(&self, point: &Point, mut n: u64) -> Result<Point> {
        let mut acc = Point::IDENTITY;
        let mut running = *point;

        while n > 0 {
            if n & 1 == 1 {
                acc = self.add(&acc, &running)?;
            }

            n >>= 1;

            if n > 0 {
                running = self.double(&running)?;
            }
        }

        Ok(acc)
    }

    /// Discriminant term `4a³ + 27b² mod p`.
    pub fn discriminant(&self) -> i64 {
        let a3 = self.fe_mul(self.fe_mul(self.a, self.a), self.a);
        let b2 = self.fe_mul(self.b, self.b);
        self.fe_add(self.fe_mul(4, a3), self.fe_mul(27, b2))
    }

    /// Is the curve singular, i.e. does its discriminant vanish modulo `p`?
    pub fn is_singular(&self) -> bool {
        self.discriminant() == 0
    }

    /// Check the curve parameters: the curve must be non-singular and the
    /// modulus prime.
    ///
    /// This is never invoked implicitly.
    pub fn validate(&self) -> Result<()> {
        if self.is_singular() {
            return Err(Error::SingularCurve);
        }

        if !is_prime(self.p as u64) {
            return Err(Error::CompositeModulus);
        }

        Ok(())
    }

    /// Returns [`Error::NotOnCurve`] unless `point` satisfies the curve
    /// equation.
    pub fn check_point(&self, point: &Point) -> Result<()> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(Error::NotOnCurve)
        }
    }

    /// Order of `point`: the smallest `n ≥ 1` with `n·point = O`.
    ///
    /// Walks the multiples of `point` one addition at a time up to the Hasse
    /// bound `p + 1 + 2√p`, so this is only usable for small moduli.
    pub fn order_of(&self, point: &Point) -> Result<u64> {
        self.check_point(point)?;

        let p = self.p as u64;
        let bound = p + 1 + 2 * (p.isqrt() + 1);

        let mut multiple = *point;
        let mut order = 1;

        while !multiple.is_identity() {
            if order >= bound {
                return Err(Error::NotOnCurve);
            }

            multiple = self.add(&multiple, point)?;
            order += 1;
        }

        Ok(order)
    }

    /// Right-hand side of the curve equation, `x³ + ax + b`.
    fn rhs(&self, x: i64) -> i64 {
        let x3 = self.fe_mul(self.fe_mul(x, x), x);
        self.fe_add(self.fe_add(x3, self.fe_mul(self.a, x)), self.b)
    }

    /// Reduced affine coordinates, or `None` for the identity.
    fn affine(&self, point: &Point) -> Option<(i64, i64)> {
        point
            .coordinates()
            .map(|(x, y)| (self.reduce(x.into()), self.reduce(y.into())))
    }

    #[inline]
    fn fe_add(&self, a: i64, b: i64) -> i64 {
        self.reduce(i128::from(a) + i128::from(b))
    }

    #[inline]
    fn fe_sub(&self, a: i64, b: i64) -> i64 {
        self.reduce(i128::from(a) - i128::from(b))
    }

    #[inline]
    fn fe_mul(&self, a: i64, b: i64) -> i64 {
        self.reduce(i128::from(a) * i128::from(b))
    }
}
