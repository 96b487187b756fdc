//! Errors reported by the calculator.
//!
//! The `Display` text of every variant is the message printed after
//! `ERROR <line>` on the error stream.

use std::io;

use thiserror::Error;

/// Errors from parsing a single input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unknown command or malformed command name.
    #[error("WRONG COMMAND")]
    WrongCommand,

    /// Missing or malformed argument of `AT`.
    #[error("AT WRONG VALUE")]
    AtWrongValue,

    /// Missing or malformed argument of `DEG_BY`.
    #[error("DEG BY WRONG VARIABLE")]
    DegByWrongVariable,

    /// Missing or malformed argument of `COMPOSE`.
    #[error("COMPOSE WRONG PARAMETER")]
    ComposeWrongParameter,

    /// The line is not a valid polynomial.
    #[error("WRONG POLY")]
    WrongPoly,
}

/// Errors from executing a line against the stack.
#[derive(Debug, Error)]
pub enum CalcError {
    /// The line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The command needs more operands than the stack holds.
    #[error("STACK UNDERFLOW")]
    StackUnderflow,

    /// Writing a result failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
