//! Line-oriented stack calculator.
//!
//! Every input line is either ignored (empty or starting with `#`), a
//! command (starting with an ASCII letter) or a polynomial to push. Results
//! go to the output sink, one per line; rejected lines produce
//! `ERROR <line> <message>` on the error sink and leave the stack unchanged.

use std::io::{self, BufRead, Write};

use polycalc_poly::Poly;
use tracing::{debug, warn};

use crate::command::Command;
use crate::error::CalcError;
use crate::parser::{parse_command, parse_poly};
use crate::stack::PolyStack;

/// A polynomial stack calculator writing results to `W` and errors to `E`.
#[derive(Debug)]
pub struct Calculator<W: Write, E: Write> {
    stack: PolyStack,
    out: W,
    err: E,
}

impl<W: Write, E: Write> Calculator<W, E> {
    /// Creates a calculator with an empty stack.
    pub fn new(out: W, err: E) -> Self {
        Self {
            stack: PolyStack::new(),
            out,
            err,
        }
    }

    /// Returns the operand stack.
    pub fn stack(&self) -> &PolyStack {
        &self.stack
    }

    /// Consumes the calculator, returning the output and error sinks.
    pub fn into_sinks(self) -> (W, E) {
        (self.out, self.err)
    }

    /// Processes every line of `input`, numbering lines from 1.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading the input or writing to a sink
    /// fails. Invalid lines are reported on the error sink.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        let mut line = Vec::new();
        let mut number = 0;

        loop {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            number += 1;
            self.process_line(number, &line)?;
        }

        debug!(lines = number, depth = self.stack.len(), "input exhausted");
        self.out.flush()
    }

    /// Processes one line, with or without its trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to a sink fails.
    pub fn process_line(&mut self, number: usize, raw: &[u8]) -> io::Result<()> {
        let line = raw.strip_suffix(b"\n").unwrap_or(raw);

        match self.execute_line(line) {
            Ok(()) => Ok(()),
            Err(CalcError::Io(e)) => Err(e),
            Err(e) => {
                warn!(line = number, error = %e, "rejected line");
                writeln!(self.err, "ERROR {number} {e}")
            }
        }
    }

    fn execute_line(&mut self, line: &[u8]) -> Result<(), CalcError> {
        match line.first() {
            None | Some(b'#') => Ok(()),
            Some(b) if b.is_ascii_alphabetic() => self.execute(parse_command(line)?),
            Some(_) => {
                let p = parse_poly(line)?;
                self.stack.push(p);
                Ok(())
            }
        }
    }

    /// Executes a single command against the stack.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::StackUnderflow`] if the stack holds too few
    /// operands (the stack is then unchanged), or [`CalcError::Io`] if
    /// writing a result fails.
    pub fn execute(&mut self, command: Command) -> Result<(), CalcError> {
        debug!(%command, depth = self.stack.len(), "executing");

        match command {
            Command::Zero => self.stack.push(Poly::zero()),
            Command::IsCoeff => {
                let p = self.stack.peek().ok_or(CalcError::StackUnderflow)?;
                writeln!(self.out, "{}", u8::from(p.is_coeff()))?;
            }
            Command::IsZero => {
                let p = self.stack.peek().ok_or(CalcError::StackUnderflow)?;
                writeln!(self.out, "{}", u8::from(p.is_zero()))?;
            }
            Command::Clone => {
                let p = self.stack.peek().ok_or(CalcError::StackUnderflow)?.clone();
                self.stack.push(p);
            }
            Command::Add => self.binary(Poly::add)?,
            Command::Mul => self.binary(Poly::mul)?,
            Command::Sub => self.binary(Poly::sub)?,
            Command::Neg => self.unary(Poly::neg)?,
            Command::IsEq => {
                let (p, q) = self.operands()?;
                let equal = p == q;
                writeln!(self.out, "{}", u8::from(equal))?;
            }
            Command::Deg => {
                let p = self.stack.peek().ok_or(CalcError::StackUnderflow)?;
                writeln!(self.out, "{}", p.deg())?;
            }
            Command::DegBy(idx) => {
                let p = self.stack.peek().ok_or(CalcError::StackUnderflow)?;
                // Depths past the tree all report the constant-term degree.
                let depth = usize::try_from(idx).unwrap_or(usize::MAX);
                writeln!(self.out, "{}", p.deg_by(depth))?;
            }
            Command::At(x) => self.unary(|p| p.at(x))?,
            Command::Print => {
                let p = self.stack.peek().ok_or(CalcError::StackUnderflow)?;
                writeln!(self.out, "{p}")?;
            }
            Command::Pop => {
                self.stack.pop().ok_or(CalcError::StackUnderflow)?;
            }
            Command::Compose(k) => self.compose(k)?,
        }

        Ok(())
    }

    /// Returns the top polynomial and the one below it.
    fn operands(&self) -> Result<(&Poly, &Poly), CalcError> {
        match (self.stack.peek(), self.stack.peek_second()) {
            (Some(p), Some(q)) => Ok((p, q)),
            _ => Err(CalcError::StackUnderflow),
        }
    }

    fn unary(&mut self, op: impl FnOnce(&Poly) -> Poly) -> Result<(), CalcError> {
        let p = self.stack.pop().ok_or(CalcError::StackUnderflow)?;
        self.stack.push(op(&p));
        Ok(())
    }

    /// Replaces the two top polynomials `p` (top) and `q` by `op(p, q)`.
    fn binary(&mut self, op: impl FnOnce(&Poly, &Poly) -> Poly) -> Result<(), CalcError> {
        let [q, p]: [Poly; 2] = self
            .stack
            .take(2)
            .and_then(|pair| pair.try_into().ok())
            .ok_or(CalcError::StackUnderflow)?;
        self.stack.push(op(&p, &q));
        Ok(())
    }

    /// Pops `p`, then the `k` polynomials below it, and pushes their
    /// composition. The polynomial directly below `p` is substituted for the
    /// last of the `k` variables.
    fn compose(&mut self, k: u64) -> Result<(), CalcError> {
        let k = usize::try_from(k).map_err(|_| CalcError::StackUnderflow)?;
        if self.stack.len() <= k {
            return Err(CalcError::StackUnderflow);
        }

        let p = self.stack.pop().ok_or(CalcError::StackUnderflow)?;
        let qs = self.stack.take(k).ok_or(CalcError::StackUnderflow)?;
        self.stack.push(p.compose(k, &qs));
        Ok(())
    }
}
