//! Lease cash-flow polynomial.

use escalate_math::Polynomial;

use crate::params::LeaseParameters;

/// Builds the lease polynomial `Σ v · x^(i/d)` for `i` in `0..y`.
///
/// One term per lease year. The exponent uses true division, so escalation
/// compounds smoothly at `1/d` of a cycle per year rather than in whole-cycle
/// steps. Callers validate `params` first; a zero cycle length would produce
/// infinite exponents.
pub fn lease_schedule(params: &LeaseParameters) -> Polynomial {
    let cycle = f64::from(params.cycle_years);
    (0..params.term_years)
        .map(|year| (params.base_rental, f64::from(year) / cycle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use escalate_math::Term;

    #[test]
    fn test_one_term_per_year() {
        let p = lease_schedule(&LeaseParameters::default());
        assert_eq!(p.len(), 15);
        assert!(p.terms().iter().all(|t| t.coefficient == 220.0));
    }

    #[test]
    fn test_fractional_exponents() {
        let p = lease_schedule(&LeaseParameters::new(100.0, 4, 3));
        let exponents: Vec<f64> = p.terms().iter().map(|t| t.exponent).collect();
        assert_eq!(exponents[0], 0.0);
        assert_relative_eq!(exponents[1], 1.0 / 3.0);
        assert_relative_eq!(exponents[2], 2.0 / 3.0);
        assert_eq!(exponents[3], 1.0);
    }

    #[test]
    fn test_annual_cycle_has_integer_exponents() {
        let p = lease_schedule(&LeaseParameters::new(50.0, 3, 1));
        assert_eq!(
            p.terms(),
            &[
                Term::new(50.0, 0.0),
                Term::new(50.0, 1.0),
                Term::new(50.0, 2.0)
            ]
        );
    }
}
