#![no_main]
// Targets: smallcurve group law and ElGamal round trips on the reference curves
use libfuzzer_sys::fuzz_target;
use smallcurve::{
    Curve, Point,
    elgamal::{ElGamal, fold_bytes},
    test_vectors::{DH_BASE_POINT, DH_CURVE, ELGAMAL_BASE_POINT, ELGAMAL_CURVE},
};

/// `s` must stay below 2^63 so that `2 * s` does not overflow.
fn test_group(curve: &Curve, p1: Point, p2: Point, s: u64) {
    // Test point arithmetic
    let sum = curve.add(&p1, &p2).unwrap();
    let scalar_mul = curve.scalar_multiply(&p1, s).unwrap();

    // Test that addition and doubling are consistent
    assert!(curve.double(&p1).unwrap() == curve.add(&p1, &p1).unwrap());

    // Test that negation works correctly
    assert!(curve.add(&sum, &curve.negate(&sum)).unwrap().is_identity());

    // Test scalar multiplication distributive property
    assert!(
        curve.add(&scalar_mul, &scalar_mul).unwrap() == curve.scalar_multiply(&p1, 2 * s).unwrap()
    );
}

fn scalar(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(buf)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }

    //
    // Test group law

    for (curve, base_point) in [(DH_CURVE, DH_BASE_POINT), (ELGAMAL_CURVE, ELGAMAL_BASE_POINT)] {
        let p1 = curve.scalar_multiply(&base_point, scalar(&data[0..])).unwrap();
        let p2 = curve.scalar_multiply(&base_point, scalar(&data[8..])).unwrap();
        test_group(&curve, p1, p2, scalar(&data[16..]) >> 2);
    }

    //
    // Test ElGamal with the folded ephemeral scalar

    let alice = ElGamal::new(&ELGAMAL_CURVE, &ELGAMAL_BASE_POINT, scalar(&data[0..]));
    let message = ELGAMAL_CURVE
        .scalar_multiply(&ELGAMAL_BASE_POINT, scalar(&data[8..]))
        .unwrap();
    let ciphertext = alice
        .encrypt_with_scalar(fold_bytes(&data[24..]), &message, &alice.public_key().unwrap())
        .unwrap();
    assert!(alice.decrypt(&ciphertext).unwrap() == message);
});
