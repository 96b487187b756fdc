//! # polycalc-poly
//!
//! Sparse multivariate polynomial arithmetic for polycalc.
//!
//! This crate provides:
//! - A canonical recursive polynomial representation over `i64`
//! - Canonicalizing construction from unordered monomial lists
//! - Addition, multiplication, negation and subtraction
//! - Total and per-variable degrees
//! - Evaluation of the leading variable and multi-variable composition
//!
//! ## Representation
//!
//! A polynomial is a constant or a sum `Σ c_i · x^e_i` whose coefficients
//! `c_i` are polynomials over the remaining variables. Values are always
//! canonical, so `==` is mathematical equality:
//!
//! ```rust
//! use polycalc_poly::{Mono, Poly};
//!
//! let x = Poly::own_monos(vec![Mono::new(1, Poly::from_coeff(1))]);
//! assert_eq!(x.add(&x.neg()), Poly::zero());
//! assert_eq!(x.mul(&x).to_string(), "(1,2)");
//! ```
//!
//! ## Overflow
//!
//! Coefficient arithmetic wraps on overflow.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod monomial;
pub mod poly;

#[cfg(test)]
mod proptests;

pub use monomial::Mono;
pub use poly::{Coeff, Degree, Exp, Poly};
