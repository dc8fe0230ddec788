//! Curve points in affine coordinates.

use core::fmt;

/// Point in affine coordinates, or the point at infinity.
///
/// A `Point` is a plain coordinate pair with no attachment to a particular
/// [`Curve`](crate::Curve): whether it lies on a curve is a question for
/// [`Curve::contains`](crate::Curve::contains). Coordinates are used as given;
/// the curve reduces them modulo `p` when doing arithmetic.
#[derive(Clone, Copy)]
pub struct Point {
    /// x-coordinate
    pub(crate) x: i64,

    /// y-coordinate
    pub(crate) y: i64,

    /// Is this point the point at infinity?
    pub(crate) infinity: bool,
}

impl Point {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: 0,
        y: 0,
        infinity: true,
    };

    /// Create a point from its affine coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// Is this point the point at infinity?
    pub const fn is_identity(&self) -> bool {
        self.infinity
    }

    /// Affine coordinates `(x, y)`, or `None` for the point at infinity.
    pub const fn coordinates(&self) -> Option<(i64, i64)> {
        if self.infinity {
            None
        } else {
            Some((self.x, self.y))
        }
    }

    /// x-coordinate, or `None` for the point at infinity.
    pub const fn x(&self) -> Option<i64> {
        if self.infinity { None } else { Some(self.x) }
    }

    /// y-coordinate, or `None` for the point at infinity.
    pub const fn y(&self) -> Option<i64> {
        if self.infinity { None } else { Some(self.y) }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            f.write_str("Point(∞)")
        } else {
            write!(f, "Point({}, {})", self.x, self.y)
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Point) -> bool {
        match (self.infinity, other.infinity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl Eq for Point {}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Point {
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn identity_equality_ignores_coordinates() {
        let other_identity = Point {
            x: 5,
            y: 7,
            infinity: true,
        };
        assert_eq!(Point::IDENTITY, other_identity);
        assert_ne!(Point::IDENTITY, Point::new(0, 0));
    }

    #[test]
    fn coordinates() {
        assert_eq!(Point::new(920, 303).coordinates(), Some((920, 303)));
        assert_eq!(Point::IDENTITY.coordinates(), None);
        assert_eq!(Point::IDENTITY.x(), None);
        assert_eq!(Point::from((6, 730)).y(), Some(730));
        assert!(Point::default().is_identity());
    }
}
