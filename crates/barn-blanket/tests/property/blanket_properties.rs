use barn_blanket::classify;
use proptest::prelude::*;

proptest! {
    #[test]
    fn colder_never_means_a_lighter_blanket(
        a in -40.0f64..110.0,
        b in -40.0f64..110.0,
        clipped in any::<bool>(),
    ) {
        let (warmer, colder) = if a >= b { (a, b) } else { (b, a) };
        prop_assert!(classify(colder, clipped) >= classify(warmer, clipped));
    }

    #[test]
    fn clipping_never_means_a_lighter_blanket(t in -40.0f64..110.0) {
        prop_assert!(classify(t, true) >= classify(t, false));
    }
}
