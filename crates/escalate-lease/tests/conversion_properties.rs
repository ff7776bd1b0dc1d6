//! Property-based tests for the rate ↔ budget mapping.
//!
//! These tests verify the invariants the two conversions must share:
//! - Budget → rate inverts rate → budget
//! - Budget grows strictly with the rate
//! - The zero-rate budget is `v · y`
//! - Budgets below that floor are rejected

use escalate_lease::prelude::*;
use proptest::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

fn lease() -> impl Strategy<Value = LeaseParameters> {
    (10.0..5000.0f64, 2u32..30, 1u32..6).prop_map(|(v, y, d)| LeaseParameters::new(v, y, d))
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn round_trip_recovers_rate(params in lease(), rate in 0.0..0.3f64) {
        let budget = rental_to_budget(rate, &params).unwrap();
        let back = budget_to_rate(budget, &params).unwrap();
        prop_assert!((back - rate).abs() < 1e-5, "{} -> {} -> {}", rate, budget, back);
    }

    #[test]
    fn budget_is_strictly_increasing(params in lease(), low in 0.0..0.3f64, gap in 1e-3..0.2f64) {
        let a = rental_to_budget(low, &params).unwrap();
        let b = rental_to_budget(low + gap, &params).unwrap();
        prop_assert!(b > a);
    }

    #[test]
    fn zero_rate_budget_is_rental_times_term(y in 1u32..40, d in 1u32..6, k in 1u32..2000) {
        // Integer rentals keep the sum exact.
        let params = LeaseParameters::new(f64::from(k), y, d);
        let budget = rental_to_budget(0.0, &params).unwrap();
        prop_assert_eq!(budget, f64::from(k) * f64::from(y));
    }

    #[test]
    fn budget_below_floor_is_rejected(params in lease(), shortfall in 1e-3..1.0f64) {
        let floor = minimum_budget(&params).unwrap();
        let err = budget_to_rate(floor * (1.0 - shortfall), &params).unwrap_err();
        let is_budget_error = matches!(err, LeaseError::InvalidBudget { .. });
        prop_assert!(is_budget_error);
    }

    #[test]
    fn negative_rate_is_rejected(params in lease(), rate in -10.0..-1e-9f64) {
        let err = rental_to_budget(rate, &params).unwrap_err();
        prop_assert_eq!(err, LeaseError::InvalidRate { rate });
    }
}

#[test]
fn reference_scenarios() {
    let lease = LeaseParameters::default();

    assert_eq!(rental_to_budget(0.0, &lease).unwrap(), 3300.0);

    let budget = rental_to_budget(0.05, &lease).unwrap();
    assert!((budget - 3707.0).abs() < 0.05);

    let rate = budget_to_rate(4000.0, &lease).unwrap();
    assert!((rate - 0.083).abs() < 5e-4);

    assert!(matches!(
        budget_to_rate(1000.0, &lease),
        Err(LeaseError::InvalidBudget { .. })
    ));
    assert!(matches!(
        rental_to_budget(-0.1, &lease),
        Err(LeaseError::InvalidRate { .. })
    ));
}
