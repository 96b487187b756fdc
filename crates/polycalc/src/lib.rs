//! # polycalc
//!
//! A line-oriented stack calculator for sparse multivariate polynomials
//! with fixed-width integer coefficients.
//!
//! ## Features
//!
//! - **Canonical Representation**: Structural equality is mathematical equality
//! - **Polynomial Arithmetic**: Addition, multiplication, negation, subtraction
//! - **Queries**: Total degree and per-variable degree
//! - **Substitution**: Evaluation at a scalar and multi-variable composition
//! - **Calculator**: A command language executed against a stack
//!
//! ## Quick Start
//!
//! ```rust
//! use polycalc::prelude::*;
//!
//! let x = Poly::var(0);
//! let p = x.mul(&x).add(&Poly::one());
//! assert_eq!(p.deg(), 2);
//! assert_eq!(p.at(3), Poly::from_coeff(10));
//! assert_eq!(parse_poly(b"(1,0)+(1,2)"), Ok(p));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;

pub use polycalc_calc as calc;
pub use polycalc_poly as poly;

pub use config::{Config, ConfigError};

use std::fs::File;
use std::io::{self, BufReader};

use polycalc_calc::Calculator;
use tracing::info;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polycalc_calc::{parse_command, parse_poly, Calculator, Command, PolyStack};
    pub use polycalc_poly::{Coeff, Degree, Exp, Mono, Poly};
}

/// Runs the calculator over the configured input, writing results to
/// standard output and errors to standard error.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, or if writing to
/// standard output or standard error fails.
pub fn run(config: &Config) -> io::Result<()> {
    let stdout = io::stdout().lock();
    let stderr = io::stderr().lock();
    let mut calc = Calculator::new(stdout, stderr);

    match &config.input {
        Some(path) => {
            info!(path = %path.display(), "reading script");
            calc.run(BufReader::new(File::open(path)?))
        }
        None => {
            info!("reading standard input");
            calc.run(io::stdin().lock())
        }
    }
}
