//! Known-answer tests against the reference curves.

#![cfg(feature = "test-vectors")]

use smallcurve::{
    Point,
    ecdh::DiffieHellman,
    elgamal::ElGamal,
    test_vectors::{
        DH_BASE_ORDER, DH_BASE_POINT, DH_CURVE, ELGAMAL_BASE_ORDER, ELGAMAL_BASE_POINT,
        ELGAMAL_CURVE, ELGAMAL_MESSAGE,
        group::{ADD_TEST_VECTORS, MUL_TEST_VECTORS},
    },
};

#[test]
fn reference_curves_are_valid() {
    for (curve, base_point) in [
        (DH_CURVE, DH_BASE_POINT),
        (ELGAMAL_CURVE, ELGAMAL_BASE_POINT),
    ] {
        assert!(curve.validate().is_ok());
        assert!(curve.check_point(&base_point).is_ok());
    }

    assert!(ELGAMAL_CURVE.contains(&ELGAMAL_MESSAGE));
    assert_eq!(DH_CURVE.order_of(&DH_BASE_POINT).unwrap(), DH_BASE_ORDER);
    assert_eq!(
        ELGAMAL_CURVE.order_of(&ELGAMAL_BASE_POINT).unwrap(),
        ELGAMAL_BASE_ORDER
    );
}

#[test]
fn affine_add() {
    let mut p = Point::IDENTITY;

    for &(x, y) in ADD_TEST_VECTORS {
        p = DH_CURVE.add(&p, &DH_BASE_POINT).unwrap();
        assert_eq!(p, Point::new(x, y));
    }
}

#[test]
fn affine_double() {
    let mut p = DH_BASE_POINT;

    for i in 0..2 {
        p = DH_CURVE.double(&p).unwrap();
        let (x, y) = ADD_TEST_VECTORS[(2 << i) - 1];
        assert_eq!(p, Point::new(x, y));
    }
}

#[test]
fn affine_mul() {
    for (k, &(x, y)) in ADD_TEST_VECTORS.iter().enumerate() {
        let p = DH_CURVE
            .scalar_multiply(&DH_BASE_POINT, k as u64 + 1)
            .unwrap();
        assert_eq!(p, Point::new(x, y));
    }

    for &(k, (x, y)) in MUL_TEST_VECTORS {
        let p = DH_CURVE.scalar_multiply(&DH_BASE_POINT, k).unwrap();
        assert_eq!(p, Point::new(x, y));
    }
}

#[test]
fn diffie_hellman_vectors() {
    let alice = DiffieHellman::new(&DH_CURVE, &DH_BASE_POINT, 1194);
    let bob = DiffieHellman::new(&DH_CURVE, &DH_BASE_POINT, 1759);

    let alice_shared = alice.shared_secret(&bob.public_key().unwrap()).unwrap();
    assert_eq!(alice_shared, Point::new(3347, 1242));
    assert_eq!(bob.shared_secret(&alice.public_key().unwrap()).unwrap(), alice_shared);
}

#[test]
fn elgamal_vectors() {
    let alice = ElGamal::new(&ELGAMAL_CURVE, &ELGAMAL_BASE_POINT, 12);
    let bob = ElGamal::new(&ELGAMAL_CURVE, &ELGAMAL_BASE_POINT, 32);
    let alice_public = alice.public_key().unwrap();

    for k in [0, 1, 7, 96, 1597, 65533] {
        let ciphertext = bob
            .encrypt_with_scalar(k, &ELGAMAL_MESSAGE, &alice_public)
            .unwrap();
        assert_eq!(alice.decrypt(&ciphertext).unwrap(), ELGAMAL_MESSAGE);
    }
}
