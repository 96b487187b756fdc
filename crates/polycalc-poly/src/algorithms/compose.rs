//! Substitution of polynomials for the leading variables.
//!
//! `p.compose(k, [q_0, ..., q_{k-1}])` computes `p(q_0, ..., q_{k-1}, 0, 0, ...)`:
//!
//! 1. every variable at depth `k` or deeper is set to zero,
//! 2. the trimmed tree is flattened into pure products
//!    `a · x_0^t_0 · ... · x_{k-1}^t_{k-1}`,
//! 3. each product becomes `a · q_0^t_0 · ... · q_{k-1}^t_{k-1}`,
//! 4. the products are summed.

use smallvec::SmallVec;
use tracing::trace;

use crate::poly::{Coeff, Exp, Poly};

/// Exponent vector of a pure product, one entry per substituted variable.
type Exponents = SmallVec<[Exp; 4]>;

/// A term `scalar · x_0^exps[0] · ... · x_{k-1}^exps[k-1]`.
#[derive(Clone, PartialEq, Eq, Debug)]
struct ProductTerm {
    scalar: Coeff,
    exps: Exponents,
}

impl ProductTerm {
    /// Replaces `x_i` by `qs[i]`. Variables with exponent zero never touch
    /// their substitute.
    fn substitute(&self, qs: &[Poly]) -> Poly {
        self.exps
            .iter()
            .zip(qs)
            .filter(|&(&e, _)| e > 0)
            .fold(Poly::from_coeff(self.scalar), |acc, (&e, q)| acc.mul(&q.pow(e)))
    }
}

impl Poly {
    /// Substitutes `qs[i]` for the variable at depth `i`, for every `i < k`.
    ///
    /// Variables at depth `k` or deeper are replaced by zero. For `k == 0`
    /// the polynomial is returned unchanged.
    ///
    /// `qs` must hold at least `k` polynomials; extra entries are ignored.
    #[must_use]
    pub fn compose(&self, k: usize, qs: &[Poly]) -> Poly {
        debug_assert!(qs.len() >= k, "compose needs {k} polynomials, got {}", qs.len());

        if k == 0 {
            return self.clone();
        }

        let trimmed = self.clone().trim(k);
        let terms = decompose(&trimmed, k);
        trace!(k, terms = terms.len(), "composing");

        terms
            .iter()
            .fold(Poly::zero(), |acc, term| acc.add(&term.substitute(qs)))
    }
}

/// Flattens a tree of depth at most `k` into pure products.
fn decompose(p: &Poly, k: usize) -> Vec<ProductTerm> {
    let mut terms = Vec::new();
    let mut exps: Exponents = SmallVec::from_elem(0, k);
    collect_terms(p, 0, &mut exps, &mut terms);
    terms
}

fn collect_terms(p: &Poly, depth: usize, exps: &mut Exponents, out: &mut Vec<ProductTerm>) {
    if let Some(scalar) = p.as_coeff() {
        if scalar != 0 {
            out.push(ProductTerm {
                scalar,
                exps: exps.clone(),
            });
        }
        return;
    }

    for m in p.monos() {
        exps[depth] = m.exp();
        collect_terms(m.poly(), depth + 1, exps, out);
    }
    exps[depth] = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monomial::Mono;

    fn c(v: Coeff) -> Poly {
        Poly::from_coeff(v)
    }

    #[test]
    fn test_compose_constant_substitute() {
        // x0 with x0 = 7
        let x = Poly::own_monos(vec![Mono::new(1, c(1))]);
        assert_eq!(x.compose(1, &[c(7)]), c(7));
    }

    #[test]
    fn test_compose_zero_vars_is_identity() {
        let p = Poly::var(0).mul(&Poly::var(1)).add(&c(2));
        assert_eq!(p.compose(0, &[]), p);
    }

    #[test]
    fn test_compose_polynomial_substitute() {
        // x0^2 + 1 with x0 = x0 + 1 gives x0^2 + 2x0 + 2
        let p = Poly::var(0).pow(2).add(&c(1));
        let q = Poly::var(0).add(&c(1));
        let expected = Poly::own_monos(vec![
            Mono::new(0, c(2)),
            Mono::new(1, c(2)),
            Mono::new(2, c(1)),
        ]);
        assert_eq!(p.compose(1, &[q]), expected);
    }

    #[test]
    fn test_compose_trims_deeper_variables() {
        // x0 + x1 + 5 with x0 = 3 and x1 set to zero
        let p = Poly::var(0).add(&Poly::var(1)).add(&c(5));
        assert_eq!(p.compose(1, &[c(3)]), c(8));

        // x1 alone with k = 1 vanishes
        assert_eq!(Poly::var(1).compose(1, &[c(9)]), Poly::zero());
    }

    #[test]
    fn test_compose_swaps_variables() {
        // x0 * x1^2 with x0 = x1, x1 = x0 gives x1 * x0^2
        let x0 = Poly::var(0);
        let x1 = Poly::var(1);
        let p = x0.mul(&x1.pow(2));
        let swapped = p.compose(2, &[x1.clone(), x0.clone()]);
        assert_eq!(swapped, x1.mul(&x0.pow(2)));
    }

    #[test]
    fn test_compose_constant_polynomial() {
        assert_eq!(c(4).compose(3, &[c(1), c(2), c(3)]), c(4));
        assert_eq!(Poly::zero().compose(1, &[c(1)]), Poly::zero());
    }

    #[test]
    fn test_compose_zero_exponent_ignores_substitute() {
        // x1 with x0 = 0 and x1 = 5
        let p = Poly::var(1);
        assert_eq!(p.compose(2, &[Poly::zero(), c(5)]), c(5));
    }

    #[test]
    fn test_compose_with_wrapping_exponents() {
        // x^(2^31 - 1) with x = x^(2^31 - 1) gives x^1, exponents modulo 2^32
        let big = Poly::own_monos(vec![Mono::new(i32::MAX as Exp, c(1))]);
        assert_eq!(big.compose(1, &[big.clone()]), Poly::var(0));
    }

    #[test]
    fn test_decompose() {
        // 3 + 2 * x0 * x1^4
        let p = c(3).add(&Poly::var(0).mul(&Poly::var(1).pow(4)).mul(&c(2)));
        let mut terms = decompose(&p, 2);
        terms.sort_by_key(|t| t.scalar);

        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].scalar, 2);
        assert_eq!(terms[0].exps.as_slice(), &[1, 4]);
        assert_eq!(terms[1].scalar, 3);
        assert_eq!(terms[1].exps.as_slice(), &[0, 0]);
    }
}
