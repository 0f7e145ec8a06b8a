//! The running-total accumulator
//!
//! Holds a single signed total. Arithmetic wraps at the `i64` bounds instead
//! of panicking, so no operation on the accumulator can fail.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An accumulator holding a running total
///
/// # Examples
/// ```
/// use calculator::models::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.add(5);
/// calc.subtract(2);
/// assert_eq!(calc.total(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Calculator {
    total: i64,
}

impl Calculator {
    /// Create a calculator whose total starts at zero
    pub const fn new() -> Self {
        Self { total: 0 }
    }

    /// Create a calculator already holding `total`
    pub const fn with_total(total: i64) -> Self {
        Self { total }
    }

    /// Get the current total
    pub const fn total(&self) -> i64 {
        self.total
    }

    /// Add `amount` to the total. Negative amounts subtract.
    pub fn add(&mut self, amount: i64) {
        self.total = self.total.wrapping_add(amount);
    }

    /// Subtract `amount` from the total
    pub fn subtract(&mut self, amount: i64) {
        self.total = self.total.wrapping_sub(amount);
    }

    /// Reset the total to zero
    pub fn clear(&mut self) {
        self.total = 0;
    }
}

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.total)
    }
}
