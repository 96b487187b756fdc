//! Property-based tests for the textual format.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use polycalc_poly::{Mono, Poly};

    use crate::parser::parse_poly;

    /// A polynomial as written by hand: unsorted, possibly repeated
    /// exponents and zero coefficients.
    #[derive(Clone, Debug)]
    enum RawPoly {
        Coeff(i64),
        Sum(Vec<(u32, RawPoly)>),
    }

    impl RawPoly {
        fn render(&self) -> String {
            match self {
                RawPoly::Coeff(c) => c.to_string(),
                RawPoly::Sum(monos) => monos
                    .iter()
                    .map(|(e, p)| format!("({},{e})", p.render()))
                    .collect::<Vec<_>>()
                    .join("+"),
            }
        }

        fn build(&self) -> Poly {
            match self {
                RawPoly::Coeff(c) => Poly::from_coeff(*c),
                RawPoly::Sum(monos) => {
                    Poly::own_monos(monos.iter().map(|(e, p)| Mono::new(*e, p.build())).collect())
                }
            }
        }
    }

    fn raw_poly() -> impl Strategy<Value = RawPoly> {
        (-5i64..5)
            .prop_map(RawPoly::Coeff)
            .prop_recursive(3, 24, 4, |inner| {
                proptest::collection::vec((0u32..4, inner), 1..4).prop_map(RawPoly::Sum)
            })
    }

    proptest! {
        #[test]
        fn parse_matches_construction(raw in raw_poly()) {
            let parsed = parse_poly(raw.render().as_bytes());
            prop_assert_eq!(parsed, Ok(raw.build()));
        }

        #[test]
        fn render_parse_round_trip(raw in raw_poly()) {
            let p = raw.build();
            let text = p.to_string();
            prop_assert_eq!(parse_poly(text.as_bytes()), Ok(p.clone()));
            prop_assert_eq!(parse_poly(text.as_bytes()).map(|q| q.to_string()), Ok(text));
        }

        #[test]
        fn any_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
            let _ = parse_poly(&bytes);
            let _ = crate::parser::parse_command(&bytes);
        }
    }
}
