//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::monomial::Mono;
    use crate::poly::{Coeff, Poly};

    // Strategy for generating small coefficients
    fn small_coeff() -> impl Strategy<Value = Coeff> {
        -20i64..20i64
    }

    // Strategy for generating polynomials in at most three variables.
    // Inputs to `own_monos` may be unsorted, repeated or zero.
    fn small_poly() -> impl Strategy<Value = Poly> {
        small_coeff()
            .prop_map(Poly::from_coeff)
            .prop_recursive(3, 24, 4, |inner| {
                proptest::collection::vec((0u32..5, inner), 0..4).prop_map(|monos| {
                    Poly::own_monos(monos.into_iter().map(|(e, p)| Mono::new(e, p)).collect())
                })
            })
    }

    fn nonzero_poly() -> impl Strategy<Value = Poly> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    /// Checks the canonical form rules on every level of the tree.
    fn is_canonical(p: &Poly) -> bool {
        if p.is_coeff() {
            return true;
        }

        let monos = p.monos();
        let sorted = monos.windows(2).all(|w| w[0].exp() < w[1].exp());
        let no_zeros = monos.iter().all(|m| !m.poly().is_zero());
        let not_degenerate = !(monos.len() == 1 && monos[0].exp() == 0 && monos[0].poly().is_coeff());

        !monos.is_empty()
            && sorted
            && no_zeros
            && not_degenerate
            && monos.iter().all(|m| is_canonical(m.poly()))
    }

    fn vars(k: usize) -> Vec<Poly> {
        (0..k).map(Poly::var).collect()
    }

    proptest! {
        // Canonical form is preserved

        #[test]
        fn construction_is_canonical(a in small_poly()) {
            prop_assert!(is_canonical(&a));
        }

        #[test]
        fn ops_are_canonical(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert!(is_canonical(&a.add(&b)));
            prop_assert!(is_canonical(&a.sub(&b)));
            prop_assert!(is_canonical(&a.mul(&b)));
            prop_assert!(is_canonical(&a.neg()));
            prop_assert!(is_canonical(&a.at(x)));
            prop_assert!(is_canonical(&a.compose(2, &[b.clone(), Poly::from_coeff(x)])));
        }

        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            prop_assert_eq!(a.add(&Poly::zero()), a.clone());
            prop_assert_eq!(Poly::zero().add(&a), a);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            prop_assert_eq!(a.mul(&Poly::one()), a.clone());
            prop_assert!(a.mul(&Poly::zero()).is_zero());
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
            prop_assert!(a.sub(&a).is_zero());
            prop_assert_eq!(a.neg().neg(), a);
        }

        #[test]
        fn poly_sub_is_add_neg(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.sub(&b), a.add(&b.neg()));
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // deg(a * b) = deg(a) + deg(b) for non-zero polynomials
            prop_assert_eq!(a.mul(&b).deg(), a.deg() + b.deg());
        }

        #[test]
        fn poly_add_degree_bound(a in small_poly(), b in small_poly()) {
            prop_assert!(a.add(&b).deg() <= a.deg().max(b.deg()));
        }

        #[test]
        fn poly_deg_by_bounded_by_deg(a in small_poly(), depth in 0usize..4) {
            prop_assert!(a.deg_by(depth) <= a.deg());
        }

        // Evaluation property

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a + b)(x) = a(x) + b(x)
            prop_assert_eq!(a.add(&b).at(x), a.at(x).add(&b.at(x)));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a * b)(x) = a(x) * b(x)
            prop_assert_eq!(a.mul(&b).at(x), a.at(x).mul(&b.at(x)));
        }

        #[test]
        fn poly_eval_constant(v in small_coeff(), x in small_coeff()) {
            prop_assert_eq!(Poly::from_coeff(v).at(x), Poly::from_coeff(v));
        }

        // Composition properties

        #[test]
        fn compose_with_variables_is_identity(a in small_poly()) {
            prop_assert_eq!(a.compose(4, &vars(4)), a);
        }

        #[test]
        fn compose_is_additive(a in small_poly(), b in small_poly(), q in small_poly()) {
            let qs = [q, Poly::var(0)];
            prop_assert_eq!(a.add(&b).compose(2, &qs), a.compose(2, &qs).add(&b.compose(2, &qs)));
        }

        #[test]
        fn compose_with_constant_matches_at(a in small_poly(), x in small_coeff()) {
            // a(x, 0, 0, ...) in both forms
            let via_compose = a.compose(1, &[Poly::from_coeff(x)]);
            let via_at = a.at(x).compose(1, &[Poly::zero()]);
            prop_assert_eq!(via_compose, via_at);
        }
    }
}
