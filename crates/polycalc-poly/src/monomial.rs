//! Monomials of the recursive polynomial representation.
//!
//! A monomial `c · x^n` pairs an exponent of the leading variable with a
//! coefficient that is itself a polynomial over the remaining variables.

use std::fmt;

use crate::poly::{Exp, Poly};

/// A monomial `poly · x^exp` of the leading variable.
///
/// The coefficient is owned by the monomial. A monomial with a zero
/// coefficient is allowed as input to [`Poly::own_monos`] and
/// [`Poly::from_monos`], which drop it during canonicalization, but never
/// appears inside a canonical polynomial.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Mono {
    pub(crate) exp: Exp,
    pub(crate) poly: Poly,
}

impl Mono {
    /// Creates the monomial `poly · x^exp`.
    #[must_use]
    pub fn new(exp: Exp, poly: Poly) -> Self {
        Self { exp, poly }
    }

    /// Returns the exponent of the leading variable.
    #[must_use]
    pub fn exp(&self) -> Exp {
        self.exp
    }

    /// Returns the coefficient polynomial.
    #[must_use]
    pub fn poly(&self) -> &Poly {
        &self.poly
    }
}

impl fmt::Display for Mono {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.poly, self.exp)
    }
}

/// Returns true if the exponents of `monos` are non-decreasing.
pub(crate) fn is_sorted(monos: &[Mono]) -> bool {
    monos.windows(2).all(|w| w[0].exp <= w[1].exp)
}
