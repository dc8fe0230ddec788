//! Test vectors for the group law on [`DH_CURVE`](super::DH_CURVE).

/// Repeated addition of the base point: entry `i` is `(i + 1)·G`.
pub const ADD_TEST_VECTORS: &[(i64, i64)] = &[
    (920, 303),
    (2373, 2607),
    (645, 740),
    (490, 204),
    (3296, 2589),
    (2047, 3018),
    (2949, 2945),
    (1136, 2555),
    (1699, 2629),
    (513, 1372),
];

/// Scalar multiples `k·G` for larger scalars.
pub const MUL_TEST_VECTORS: &[(u64, (i64, i64))] = &[
    (1194, (2067, 2178)),
    (1759, (3684, 3125)),
    (1963, (920, 3548)),
    (1965, (920, 303)),
    (0xdead, (3682, 561)),
];
