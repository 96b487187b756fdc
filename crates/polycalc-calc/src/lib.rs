//! # polycalc-calc
//!
//! Stack calculator for sparse multivariate polynomials.
//!
//! This crate provides:
//! - A parser for the textual polynomial grammar and calculator commands
//! - An operand stack of polynomials
//! - A calculator executing one line at a time against the stack
//!
//! ## Example
//!
//! ```rust
//! use polycalc_calc::Calculator;
//!
//! let script = "(1,1)\nCLONE\nMUL\nPRINT\nFOO\n";
//! let mut calc = Calculator::new(Vec::new(), Vec::new());
//! calc.run(script.as_bytes()).unwrap();
//!
//! let (out, err) = calc.into_sinks();
//! assert_eq!(out, b"(1,2)\n");
//! assert_eq!(err, b"ERROR 5 WRONG COMMAND\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calculator;
pub mod command;
pub mod error;
pub mod parser;
pub mod stack;

#[cfg(test)]
mod proptests;

pub use calculator::Calculator;
pub use command::Command;
pub use error::{CalcError, ParseError};
pub use parser::{parse_command, parse_poly};
pub use stack::PolyStack;
