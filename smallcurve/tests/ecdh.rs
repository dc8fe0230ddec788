use proptest::{prop_assert_eq, proptest};
use smallcurve::{Curve, Point, ecdh::DiffieHellman};

const BASE_POINT: Point = Point::new(920, 303);

fn curve() -> Curve {
    Curve::new(324, 1287, 3851).unwrap()
}

#[test]
fn ecdh() {
    let curve = curve();

    // Alice
    let alice = DiffieHellman::new(&curve, &BASE_POINT, 1194);
    let alice_public = alice.public_key().unwrap();

    // Bob
    let bob = DiffieHellman::new(&curve, &BASE_POINT, 1759);
    let bob_public = bob.public_key().unwrap();

    let alice_shared = alice.shared_secret(&bob_public).unwrap();
    let bob_shared = bob.shared_secret(&alice_public).unwrap();

    // Both participants arrive on the same shared secret
    assert_eq!(alice_shared, bob_shared);
    assert_eq!(alice_shared, Point::new(3347, 1242));
}

#[test]
fn shared_curve_across_threads() {
    let curve = curve();

    let (alice_public, bob_public) = std::thread::scope(|s| {
        let alice = s.spawn(|| DiffieHellman::new(&curve, &BASE_POINT, 1194).public_key());
        let bob = s.spawn(|| DiffieHellman::new(&curve, &BASE_POINT, 1759).public_key());
        (alice.join().unwrap().unwrap(), bob.join().unwrap().unwrap())
    });

    let alice = DiffieHellman::new(&curve, &BASE_POINT, 1194);
    assert_eq!(
        alice.shared_secret(&bob_public).unwrap(),
        DiffieHellman::new(&curve, &BASE_POINT, 1759)
            .shared_secret(&alice_public)
            .unwrap()
    );
}

proptest! {
    #[test]
    fn shared_secrets_agree(a in 1u64..1964, b in 1u64..1964) {
        let curve = curve();
        let alice = DiffieHellman::new(&curve, &BASE_POINT, a);
        let bob = DiffieHellman::new(&curve, &BASE_POINT, b);

        let alice_shared = alice.shared_secret(&bob.public_key().unwrap()).unwrap();
        let bob_shared = bob.shared_secret(&alice.public_key().unwrap()).unwrap();

        prop_assert_eq!(alice_shared, bob_shared);
        prop_assert_eq!(alice_shared, curve.scalar_multiply(&BASE_POINT, a * b).unwrap());
    }
}
