//! Sparse polynomials with real exponents.
//!
//! A [`Polynomial`] is an ordered list of `(coefficient, exponent)` terms.
//! Exponents need not be integers, so the lease model can space compounding
//! events at fractional powers of the escalation multiplier.
//!
//! Term order never changes the value mathematically, but it is preserved so
//! that floating-point summation happens in the same order on every call.

use crate::error::{MathError, MathResult};

/// A single `coefficient * x^exponent` term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    /// Multiplier applied to the power of `x`.
    pub coefficient: f64,
    /// Power of `x`; may be fractional.
    pub exponent: f64,
}

impl Term {
    /// Creates a new term.
    #[must_use]
    pub const fn new(coefficient: f64, exponent: f64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Evaluates the term at `x`.
    ///
    /// A zero exponent yields the coefficient itself, so `0^0` is treated as 1.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        if self.exponent == 0.0 {
            self.coefficient
        } else {
            self.coefficient * x.powf(self.exponent)
        }
    }
}

impl From<(f64, f64)> for Term {
    fn from((coefficient, exponent): (f64, f64)) -> Self {
        Self::new(coefficient, exponent)
    }
}

/// An ordered, sparse polynomial.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates an empty polynomial, which evaluates to zero everywhere.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polynomial from terms, keeping their order.
    #[must_use]
    pub fn from_terms(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// Appends a term.
    pub fn push(&mut self, coefficient: f64, exponent: f64) {
        self.terms.push(Term::new(coefficient, exponent));
    }

    /// Returns the polynomial with an extra term appended.
    #[must_use]
    pub fn with_term(mut self, coefficient: f64, exponent: f64) -> Self {
        self.push(coefficient, exponent);
        self
    }

    /// Returns the terms in insertion order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of stored terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when there are no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Largest exponent present, or `None` for the empty polynomial.
    pub fn degree(&self) -> Option<f64> {
        self.terms.iter().map(|t| t.exponent).reduce(f64::max)
    }

    /// Evaluates `Σ c·x^e` over all terms, summing in term order.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().map(|t| t.evaluate(x)).sum()
    }

    /// Differentiates term by term.
    ///
    /// Constant terms are dropped rather than kept as zero terms, and the
    /// surviving terms keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidPolynomial`] if any term has a negative
    /// exponent.
    pub fn differentiate(&self) -> MathResult<Polynomial> {
        let mut derivative = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            if term.exponent < 0.0 {
                return Err(MathError::InvalidPolynomial {
                    coefficient: term.coefficient,
                    exponent: term.exponent,
                });
            }
            if term.exponent > 0.0 {
                derivative.push(Term::new(
                    term.coefficient * term.exponent,
                    term.exponent - 1.0,
                ));
            }
        }
        Ok(Polynomial::from_terms(derivative))
    }
}

impl From<Vec<(f64, f64)>> for Polynomial {
    fn from(terms: Vec<(f64, f64)>) -> Self {
        terms.into_iter().collect()
    }
}

impl FromIterator<(f64, f64)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self::from_terms(iter.into_iter().map(Term::from).collect())
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::from_terms(iter.into_iter().collect())
    }
}

impl Extend<Term> for Polynomial {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        self.terms.extend(iter);
    }
}

/// Evaluates `polynomial` at `x`. See [`Polynomial::evaluate`].
pub fn evaluate(polynomial: &Polynomial, x: f64) -> f64 {
    polynomial.evaluate(x)
}

/// Differentiates `polynomial`. See [`Polynomial::differentiate`].
pub fn differentiate(polynomial: &Polynomial) -> MathResult<Polynomial> {
    polynomial.differentiate()
}
