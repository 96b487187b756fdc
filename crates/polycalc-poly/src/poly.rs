//! Canonical sparse multivariate polynomials.
//!
//! A polynomial is either a constant or a sum of monomials `c_i · x^e_i` in
//! the leading variable `x`, where every `c_i` is again a polynomial over
//! the remaining variables. Variables are identified only by nesting depth.
//!
//! Every value built by this module is kept in canonical form:
//!
//! - exponents inside one sum are strictly increasing,
//! - no monomial has a zero coefficient,
//! - a sum is never a lone `x^0` monomial with a constant coefficient,
//! - zero is always the constant `0`, never a sum.
//!
//! With these rules structural equality is mathematical equality.

use std::cmp::Ordering;
use std::fmt;
use std::ops;

use num_traits::{One, Zero};

use crate::monomial::{self, Mono};

/// Coefficient type.
///
/// All coefficient arithmetic wraps on overflow (two's complement).
pub type Coeff = i64;

/// Exponent type.
///
/// Exponent addition in [`Poly::mul`] wraps modulo `2^32`, so `x^(2^32)`
/// is `x^0`.
pub type Exp = u32;

/// Degree of a polynomial; `-1` for the zero polynomial.
pub type Degree = i64;

/// A multivariate polynomial in canonical form.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Poly(Repr);

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
enum Repr {
    /// A constant with respect to every remaining variable.
    Coeff(Coeff),
    /// Monomials sorted by strictly increasing exponent.
    Sum(Vec<Mono>),
}

impl Poly {
    /// Creates the zero polynomial.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Repr::Coeff(0))
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub const fn one() -> Self {
        Self(Repr::Coeff(1))
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub const fn from_coeff(c: Coeff) -> Self {
        Self(Repr::Coeff(c))
    }

    /// Creates the polynomial `x_i`, the variable at nesting depth `i`.
    #[must_use]
    pub fn var(i: usize) -> Self {
        (0..i).fold(Self(Repr::Sum(vec![Mono::new(1, Self::one())])), |inner, _| {
            Self(Repr::Sum(vec![Mono::new(0, inner)]))
        })
    }

    /// Builds the canonical sum of a list of monomials, cloning them.
    ///
    /// The monomials may be unsorted, repeat exponents or carry zero
    /// coefficients.
    #[must_use]
    pub fn from_monos(monos: &[Mono]) -> Self {
        Self::own_monos(monos.to_vec())
    }

    /// Builds the canonical sum of a list of monomials, taking ownership.
    ///
    /// The monomials may be unsorted, repeat exponents or carry zero
    /// coefficients.
    #[must_use]
    pub fn own_monos(mut monos: Vec<Mono>) -> Self {
        if !monomial::is_sorted(&monos) {
            monos.sort_by_key(Mono::exp);
        }
        Self::merge_sorted(monos)
    }

    /// Merges runs of equal exponents in a sorted monomial list.
    fn merge_sorted(monos: Vec<Mono>) -> Self {
        let mut merged: Vec<Mono> = Vec::with_capacity(monos.len());

        for mono in monos {
            match merged.last_mut() {
                Some(last) if last.exp == mono.exp => {
                    last.poly = last.poly.add(&mono.poly);
                }
                _ => merged.push(mono),
            }
        }

        Self::simplify(merged)
    }

    /// Restores canonical form on a list with strictly increasing exponents.
    pub(crate) fn simplify(mut monos: Vec<Mono>) -> Self {
        monos.retain(|m| !m.poly.is_zero());

        if monos.is_empty() {
            return Self::zero();
        }
        if let [Mono {
            exp: 0,
            poly: Poly(Repr::Coeff(c)),
        }] = monos.as_slice()
        {
            return Self::from_coeff(*c);
        }
        Self(Repr::Sum(monos))
    }

    /// Returns true if this polynomial is a constant.
    #[must_use]
    pub fn is_coeff(&self) -> bool {
        matches!(self.0, Repr::Coeff(_))
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self.0, Repr::Coeff(0))
    }

    /// Returns the constant value, if this polynomial is a constant.
    #[must_use]
    pub fn as_coeff(&self) -> Option<Coeff> {
        match self.0 {
            Repr::Coeff(c) => Some(c),
            Repr::Sum(_) => None,
        }
    }

    /// Returns the monomials of a sum, or an empty slice for a constant.
    #[must_use]
    pub fn monos(&self) -> &[Mono] {
        match &self.0 {
            Repr::Coeff(_) => &[],
            Repr::Sum(monos) => monos,
        }
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        match (&self.0, &other.0) {
            (Repr::Coeff(a), Repr::Coeff(b)) => Self::from_coeff(a.wrapping_add(*b)),
            (Repr::Sum(a), Repr::Sum(b)) => Self::simplify(merge_runs(a, b)),
            (Repr::Coeff(c), Repr::Sum(monos)) | (Repr::Sum(monos), Repr::Coeff(c)) => {
                if *c == 0 {
                    return Self(Repr::Sum(monos.clone()));
                }
                let constant = [Mono::new(0, Self::from_coeff(*c))];
                Self::simplify(merge_runs(monos, &constant))
            }
        }
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        let mut result = self.clone();
        result.negate_in_place();
        result
    }

    fn negate_in_place(&mut self) {
        match &mut self.0 {
            Repr::Coeff(c) => *c = c.wrapping_neg(),
            Repr::Sum(monos) => {
                for m in monos {
                    m.poly.negate_in_place();
                }
            }
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials.
    ///
    /// Each monomial of `self` yields one row of partial products; rows are
    /// canonicalized separately and summed. A row whose exponents wrapped
    /// past `Exp::MAX` is re-sorted before merging.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        match (&self.0, &other.0) {
            (Repr::Coeff(a), Repr::Coeff(b)) => Self::from_coeff(a.wrapping_mul(*b)),
            (Repr::Sum(a), Repr::Sum(b)) => a.iter().fold(Self::zero(), |acc, left| {
                let row = b
                    .iter()
                    .map(|right| {
                        Mono::new(left.exp.wrapping_add(right.exp), left.poly.mul(&right.poly))
                    })
                    .collect();
                acc.add(&Self::own_monos(row))
            }),
            (Repr::Coeff(c), Repr::Sum(monos)) | (Repr::Sum(monos), Repr::Coeff(c)) => {
                Self::scale(monos, *c)
            }
        }
    }

    /// Multiplies a sum by a scalar.
    fn scale(monos: &[Mono], c: Coeff) -> Self {
        if c == 0 {
            return Self::zero();
        }

        let scalar = Self::from_coeff(c);
        Self::simplify(
            monos
                .iter()
                .map(|m| Mono::new(m.exp, m.poly.mul(&scalar)))
                .collect(),
        )
    }

    /// Raises the polynomial to the power `exp` by repeated squaring.
    #[must_use]
    pub fn pow(&self, exp: Exp) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Computes the total degree, or `-1` for the zero polynomial.
    #[must_use]
    pub fn deg(&self) -> Degree {
        match &self.0 {
            Repr::Coeff(c) => constant_degree(*c),
            Repr::Sum(monos) => monos
                .iter()
                .map(|m| Degree::from(m.exp) + m.poly.deg())
                .max()
                .unwrap_or(-1),
        }
    }

    /// Computes the degree in the variable at nesting depth `depth`.
    ///
    /// Constants have degree `0` in every variable (`-1` if zero).
    #[must_use]
    pub fn deg_by(&self, depth: usize) -> Degree {
        match &self.0 {
            Repr::Coeff(c) => constant_degree(*c),
            Repr::Sum(monos) if depth == 0 => monos
                .iter()
                .map(|m| Degree::from(m.exp))
                .max()
                .unwrap_or(-1),
            Repr::Sum(monos) => monos
                .iter()
                .map(|m| m.poly.deg_by(depth - 1))
                .max()
                .unwrap_or(-1),
        }
    }

    /// Substitutes `x` for the leading variable.
    ///
    /// The result is a polynomial over the remaining variables, each moved
    /// one level up.
    #[must_use]
    pub fn at(&self, x: Coeff) -> Self {
        match &self.0 {
            Repr::Coeff(_) => self.clone(),
            Repr::Sum(monos) => monos.iter().fold(Self::zero(), |acc, m| {
                let power = Self::from_coeff(x.wrapping_pow(m.exp));
                acc.add(&power.mul(&m.poly))
            }),
        }
    }

    /// Sets every variable at depth `k` or deeper to zero.
    ///
    /// Consumes the tree so that untouched subtrees are moved, not copied.
    pub(crate) fn trim(self, k: usize) -> Self {
        match self.0 {
            Repr::Coeff(c) => Self::from_coeff(c),
            Repr::Sum(monos) if k == 0 => match monos.into_iter().next() {
                Some(first) if first.exp == 0 => first.poly.trim(0),
                _ => Self::zero(),
            },
            Repr::Sum(monos) => Self::simplify(
                monos
                    .into_iter()
                    .map(|m| Mono::new(m.exp, m.poly.trim(k - 1)))
                    .collect(),
            ),
        }
    }
}

fn constant_degree(c: Coeff) -> Degree {
    if c == 0 {
        -1
    } else {
        0
    }
}

/// Merges two monomial runs sorted by exponent, adding equal-exponent
/// coefficients. The output may contain zero coefficients.
fn merge_runs(a: &[Mono], b: &[Mono]) -> Vec<Mono> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].exp.cmp(&b[j].exp) {
            Ordering::Less => {
                out.push(a[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                out.push(b[j].clone());
                j += 1;
            }
            Ordering::Equal => {
                out.push(Mono::new(a[i].exp, a[i].poly.add(&b[j].poly)));
                i += 1;
                j += 1;
            }
        }
    }

    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Coeff> for Poly {
    fn from(c: Coeff) -> Self {
        Self::from_coeff(c)
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Coeff(c) => write!(f, "{c}"),
            Repr::Sum(monos) => {
                for (i, m) in monos.iter().enumerate() {
                    if i > 0 {
                        f.write_str("+")?;
                    }
                    write!(f, "{m}")?;
                }
                Ok(())
            }
        }
    }
}

// Arithmetic operators
impl ops::Add for Poly {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Poly::add(&self, &rhs)
    }
}

impl ops::Add<&Poly> for Poly {
    type Output = Self;

    fn add(self, rhs: &Poly) -> Self::Output {
        Poly::add(&self, rhs)
    }
}

impl ops::Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: Self) -> Self::Output {
        Poly::add(self, rhs)
    }
}

impl ops::Sub for Poly {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Poly::sub(&self, &rhs)
    }
}

impl ops::Sub<&Poly> for Poly {
    type Output = Self;

    fn sub(self, rhs: &Poly) -> Self::Output {
        Poly::sub(&self, rhs)
    }
}

impl ops::Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: Self) -> Self::Output {
        Poly::sub(self, rhs)
    }
}

impl ops::Mul for Poly {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Poly::mul(&self, &rhs)
    }
}

impl ops::Mul<&Poly> for Poly {
    type Output = Self;

    fn mul(self, rhs: &Poly) -> Self::Output {
        Poly::mul(&self, rhs)
    }
}

impl ops::Mul for &Poly {
    type Output = Poly;

    fn mul(self, rhs: Self) -> Self::Output {
        Poly::mul(self, rhs)
    }
}

impl ops::Neg for Poly {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.negate_in_place();
        self
    }
}

impl ops::Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Self::Output {
        Poly::neg(self)
    }
}

impl Zero for Poly {
    fn zero() -> Self {
        Poly::zero()
    }

    fn is_zero(&self) -> bool {
        Poly::is_zero(self)
    }
}

impl One for Poly {
    fn one() -> Self {
        Poly::one()
    }
}
