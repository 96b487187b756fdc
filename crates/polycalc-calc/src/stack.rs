//! Operand stack of the calculator.

use polycalc_poly::Poly;

/// A last-in-first-out stack of polynomials.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolyStack {
    items: Vec<Poly>,
}

impl PolyStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of polynomials on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a polynomial.
    pub fn push(&mut self, p: Poly) {
        self.items.push(p);
    }

    /// Removes and returns the top polynomial.
    pub fn pop(&mut self) -> Option<Poly> {
        self.items.pop()
    }

    /// Returns the top polynomial.
    #[must_use]
    pub fn peek(&self) -> Option<&Poly> {
        self.items.last()
    }

    /// Returns the polynomial directly below the top.
    #[must_use]
    pub fn peek_second(&self) -> Option<&Poly> {
        self.items.len().checked_sub(2).map(|i| &self.items[i])
    }

    /// Removes the top `n` polynomials, returned bottom to top.
    ///
    /// Returns `None` and leaves the stack untouched if it holds fewer than
    /// `n` polynomials.
    pub fn take(&mut self, n: usize) -> Option<Vec<Poly>> {
        let start = self.items.len().checked_sub(n)?;
        Some(self.items.split_off(start))
    }

    /// Iterates from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Poly> {
        self.items.iter()
    }
}
