//! Parsing of calculator input lines.
//!
//! Polynomials use the grammar
//!
//! ```text
//! poly  := coeff | monos
//! monos := mono ('+' mono)*
//! mono  := '(' poly ',' exp ')'
//! coeff := '-'? digit+          (an i64)
//! exp   := digit+               (at most 2147483647)
//! ```
//!
//! Commands are upper-case keywords, three of which take one argument
//! separated by a single space.

use polycalc_poly::{Coeff, Exp, Mono, Poly};

use crate::command::Command;
use crate::error::ParseError;

/// Largest exponent accepted in input.
pub const MAX_EXP: Exp = i32::MAX as Exp;

/// Deepest monomial nesting accepted in input.
pub const MAX_DEPTH: usize = 512;

/// Parses a polynomial line (without the trailing newline).
///
/// The result is canonical: monomials are sorted, merged and simplified.
///
/// # Errors
///
/// Returns [`ParseError::WrongPoly`] if the line does not match the grammar,
/// a number is out of range or monomials nest deeper than [`MAX_DEPTH`].
pub fn parse_poly(line: &[u8]) -> Result<Poly, ParseError> {
    let mut parser = PolyParser {
        bytes: line,
        pos: 0,
        depth: 0,
    };
    let poly = parser.poly()?;

    if parser.pos == line.len() {
        Ok(poly)
    } else {
        Err(ParseError::WrongPoly)
    }
}

/// Parses a command line (without the trailing newline).
///
/// # Errors
///
/// Returns the error matching the command whose argument is malformed, or
/// [`ParseError::WrongCommand`] for anything that is not a command.
pub fn parse_command(line: &[u8]) -> Result<Command, ParseError> {
    if line.contains(&0) {
        return Err(ParseError::WrongCommand);
    }

    let simple = match line {
        b"ZERO" => Some(Command::Zero),
        b"IS_COEFF" => Some(Command::IsCoeff),
        b"IS_ZERO" => Some(Command::IsZero),
        b"CLONE" => Some(Command::Clone),
        b"ADD" => Some(Command::Add),
        b"MUL" => Some(Command::Mul),
        b"NEG" => Some(Command::Neg),
        b"SUB" => Some(Command::Sub),
        b"IS_EQ" => Some(Command::IsEq),
        b"DEG" => Some(Command::Deg),
        b"PRINT" => Some(Command::Print),
        b"POP" => Some(Command::Pop),
        _ => None,
    };
    if let Some(command) = simple {
        return Ok(command);
    }

    if let Some(rest) = line.strip_prefix(b"AT") {
        let err = ParseError::AtWrongValue;
        return parse_signed(argument(rest, err)?).map(Command::At).ok_or(err);
    }
    if let Some(rest) = line.strip_prefix(b"DEG_BY") {
        let err = ParseError::DegByWrongVariable;
        return parse_unsigned(argument(rest, err)?).map(Command::DegBy).ok_or(err);
    }
    if let Some(rest) = line.strip_prefix(b"COMPOSE") {
        let err = ParseError::ComposeWrongParameter;
        return parse_unsigned(argument(rest, err)?).map(Command::Compose).ok_or(err);
    }

    Err(ParseError::WrongCommand)
}

/// Extracts the argument following a keyword.
///
/// A missing argument or a tab separator is an argument error; any other
/// character glued to the keyword makes the whole line an unknown command.
fn argument(rest: &[u8], err: ParseError) -> Result<&[u8], ParseError> {
    match rest.split_first() {
        None | Some((b'\t', _)) => Err(err),
        Some((b' ', arg)) => Ok(arg),
        Some(_) => Err(ParseError::WrongCommand),
    }
}

fn all_digits(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit)
}

/// Parses `-?digit+` as an `i64`.
fn parse_signed(arg: &[u8]) -> Option<Coeff> {
    let digits = arg.strip_prefix(b"-").unwrap_or(arg);
    if !all_digits(digits) {
        return None;
    }
    std::str::from_utf8(arg).ok()?.parse().ok()
}

/// Parses `digit+` as a `u64`.
fn parse_unsigned(arg: &[u8]) -> Option<u64> {
    if !all_digits(arg) {
        return None;
    }
    std::str::from_utf8(arg).ok()?.parse().ok()
}

/// Recursive-descent parser over one line.
struct PolyParser<'a> {
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
}

impl PolyParser<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), ParseError> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(ParseError::WrongPoly)
        }
    }

    fn poly(&mut self) -> Result<Poly, ParseError> {
        match self.peek() {
            Some(b'(') => self.monos(),
            Some(b'-' | b'0'..=b'9') => self.coeff().map(Poly::from_coeff),
            _ => Err(ParseError::WrongPoly),
        }
    }

    fn monos(&mut self) -> Result<Poly, ParseError> {
        let mut monos = vec![self.mono()?];
        while self.eat(b'+') {
            monos.push(self.mono()?);
        }
        Ok(Poly::own_monos(monos))
    }

    fn mono(&mut self) -> Result<Mono, ParseError> {
        if self.depth == MAX_DEPTH {
            return Err(ParseError::WrongPoly);
        }
        self.expect(b'(')?;
        self.depth += 1;
        let poly = self.poly()?;
        self.depth -= 1;
        self.expect(b',')?;
        let exp = self.exp()?;
        self.expect(b')')?;
        Ok(Mono::new(exp, poly))
    }

    fn digits(&mut self) -> &[u8] {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        &self.bytes[start..self.pos]
    }

    fn coeff(&mut self) -> Result<Coeff, ParseError> {
        let start = self.pos;
        self.eat(b'-');
        self.digits();
        parse_signed(&self.bytes[start..self.pos]).ok_or(ParseError::WrongPoly)
    }

    fn exp(&mut self) -> Result<Exp, ParseError> {
        let digits = self.digits();
        parse_unsigned(digits)
            .and_then(|e| Exp::try_from(e).ok())
            .filter(|&e| e <= MAX_EXP)
            .ok_or(ParseError::WrongPoly)
    }
}
