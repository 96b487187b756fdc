//! Polynomial algorithms built on top of the canonical representation.
//!
//! This module contains:
//! - Multi-variable composition (substitution for the leading variables)

pub mod compose;
