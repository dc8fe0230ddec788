//! Integer helpers backing the field arithmetic.

/// Computes `a mod b` as a value in `[0, |b|)`, also for negative `a`.
///
/// # Panics
///
/// Panics if `b` is zero.
#[inline]
pub const fn modulo(a: i128, b: i128) -> i128 {
    a.rem_euclid(b)
}

/// Greatest common divisor of `a` and `b`, always non-negative.
pub const fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let t = b;
        b = modulo(a, b);
        a = t;
    }

    a.abs()
}

/// Bezout coefficients `(x, y)` such that `a·x + b·y = gcd(a, b)` for
/// non-negative `a` and `b`, found with the iterative extended Euclidean
/// algorithm.
pub const fn extended_gcd(mut a: i128, mut b: i128) -> (i128, i128) {
    let (mut x, mut last_x) = (0, 1);
    let (mut y, mut last_y) = (1, 0);

    while b != 0 {
        let r = modulo(a, b);
        let q = (a - r) / b;

        (x, last_x) = (last_x - q * x, x);
        (y, last_y) = (last_y - q * y, y);
        (a, b) = (b, r);
    }

    (last_x, last_y)
}

/// Deterministic Miller-Rabin primality test, exact for every `u64`.
pub(crate) fn is_prime(n: u64) -> bool {
    // Sufficient witness set for n < 3.3·10²⁴.
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }

    for w in WITNESSES {
        if n % w == 0 {
            return n == w;
        }
    }

    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    'witness: for a in WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }

        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

#[inline(always)]
const fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut acc = 1;
    base %= m;

    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }

    acc
}
