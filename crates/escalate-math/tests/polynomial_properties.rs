//! Property-based tests for polynomial calculus and the Newton solver.
//!
//! - The symbolic derivative agrees with a central finite difference
//! - Differentiation rejects any negative exponent
//! - Newton recovers a planted simple root

use escalate_math::prelude::*;
use proptest::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

fn term() -> impl Strategy<Value = (f64, f64)> {
    (-10.0..10.0f64, 0.0..4.0f64)
}

fn polynomial() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec(term(), 0..8).prop_map(Polynomial::from)
}

fn central_difference(p: &Polynomial, x: f64) -> f64 {
    let h = 1e-5;
    (p.evaluate(x + h) - p.evaluate(x - h)) / (2.0 * h)
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn derivative_matches_finite_difference(p in polynomial(), x in 0.5..2.0f64) {
        let dp = p.differentiate().unwrap();
        let analytic = dp.evaluate(x);
        let numeric = central_difference(&p, x);
        prop_assert!(
            (analytic - numeric).abs() <= 1e-5 * (1.0 + analytic.abs()),
            "analytic {} vs numeric {}", analytic, numeric
        );
    }

    #[test]
    fn derivative_never_grows_term_count(p in polynomial()) {
        let dp = p.differentiate().unwrap();
        prop_assert!(dp.len() <= p.len());
    }

    #[test]
    fn negative_exponent_is_rejected(
        mut terms in prop::collection::vec(term(), 0..6),
        bad in (-10.0..10.0f64, -5.0..-0.001f64),
        at in any::<prop::sample::Index>(),
    ) {
        let position = at.index(terms.len() + 1);
        terms.insert(position, bad);
        let err = Polynomial::from(terms).differentiate().unwrap_err();
        let is_invalid = matches!(err, MathError::InvalidPolynomial { .. });
        prop_assert!(is_invalid);
    }

    #[test]
    fn newton_recovers_planted_root(root in 0.8..1.6f64, scale in 1.0..50.0f64) {
        // scale * (x^3 - root^3) is strictly increasing with one real root
        let f = Polynomial::from(vec![(scale, 3.0), (-scale * root.powi(3), 0.0)]);
        let found = find_root(&f).unwrap();
        prop_assert!((found - root).abs() < 1e-6);
    }
}
