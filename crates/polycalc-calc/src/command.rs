//! Calculator commands.

use std::fmt;

use polycalc_poly::Coeff;

/// A parsed calculator command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Push the zero polynomial.
    Zero,
    /// Print whether the top polynomial is a constant.
    IsCoeff,
    /// Print whether the top polynomial is zero.
    IsZero,
    /// Push a copy of the top polynomial.
    Clone,
    /// Replace the two top polynomials by their sum.
    Add,
    /// Replace the two top polynomials by their product.
    Mul,
    /// Negate the top polynomial.
    Neg,
    /// Replace the two top polynomials by top minus second.
    Sub,
    /// Print whether the two top polynomials are equal.
    IsEq,
    /// Print the total degree of the top polynomial.
    Deg,
    /// Print the degree of the top polynomial in the given variable.
    DegBy(u64),
    /// Substitute the value for the leading variable of the top polynomial.
    At(Coeff),
    /// Print the top polynomial.
    Print,
    /// Discard the top polynomial.
    Pop,
    /// Substitute the `k` polynomials below the top one into it.
    Compose(u64),
}

impl Command {
    /// Returns the keyword that introduces the command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Command::Zero => "ZERO",
            Command::IsCoeff => "IS_COEFF",
            Command::IsZero => "IS_ZERO",
            Command::Clone => "CLONE",
            Command::Add => "ADD",
            Command::Mul => "MUL",
            Command::Neg => "NEG",
            Command::Sub => "SUB",
            Command::IsEq => "IS_EQ",
            Command::Deg => "DEG",
            Command::DegBy(_) => "DEG_BY",
            Command::At(_) => "AT",
            Command::Print => "PRINT",
            Command::Pop => "POP",
            Command::Compose(_) => "COMPOSE",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::DegBy(idx) => write!(f, "{} {idx}", self.name()),
            Command::At(x) => write!(f, "{} {x}", self.name()),
            Command::Compose(k) => write!(f, "{} {k}", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}
