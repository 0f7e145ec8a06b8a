//! Calculator operations and the script parser
//!
//! A script is a whitespace-separated sequence such as
//! `add 5 subtract 2 total`. Keywords are case-insensitive.

use std::fmt;

use super::amount::parse_amount;
use super::calculator::Calculator;
use crate::error::{CalculatorError, CalculatorResult};

/// A single operation against a calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Add an amount to the total
    Add(i64),
    /// Subtract an amount from the total
    Subtract(i64),
    /// Reset the total to zero
    Clear,
    /// Read the total
    Total,
}

impl Operation {
    /// Whether this operation changes the total
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Operation::Total)
    }

    /// Apply the operation, returning the total for `Total`
    pub fn apply(&self, calc: &mut Calculator) -> Option<i64> {
        match *self {
            Operation::Add(amount) => calc.add(amount),
            Operation::Subtract(amount) => calc.subtract(amount),
            Operation::Clear => calc.clear(),
            Operation::Total => return Some(calc.total()),
        }
        None
    }

    /// Parse a sequence of tokens into operations
    pub fn parse_script<I, S>(tokens: I) -> CalculatorResult<Vec<Operation>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = tokens.into_iter();
        let mut ops = Vec::new();

        while let Some(token) = tokens.next() {
            let keyword = token.as_ref().trim().to_lowercase();
            let op = match keyword.as_str() {
                "" => continue,
                "add" | "+" => Operation::Add(next_amount(&mut tokens, "add")?),
                "subtract" | "sub" | "-" => {
                    Operation::Subtract(next_amount(&mut tokens, "subtract")?)
                }
                "clear" | "reset" => Operation::Clear,
                "total" | "=" => Operation::Total,
                _ => {
                    return Err(CalculatorError::InvalidArgument(format!(
                        "Unknown operation: '{}'",
                        token.as_ref().trim()
                    )))
                }
            };
            ops.push(op);
        }

        Ok(ops)
    }

    /// Parse one line of input. A blank line yields no operations.
    pub fn parse_line(line: &str) -> CalculatorResult<Vec<Operation>> {
        Self::parse_script(line.split_whitespace())
    }
}

fn next_amount<I, S>(tokens: &mut I, keyword: &str) -> CalculatorResult<i64>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    match tokens.next() {
        Some(token) => parse_amount(token.as_ref()),
        None => Err(CalculatorError::InvalidArgument(format!(
            "'{}' requires an amount",
            keyword
        ))),
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add(amount) => write!(f, "add {}", amount),
            Operation::Subtract(amount) => write!(f, "subtract {}", amount),
            Operation::Clear => write!(f, "clear"),
            Operation::Total => write!(f, "total"),
        }
    }
}
