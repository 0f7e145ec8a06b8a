//! Calculator session service
//!
//! Applies operations to one calculator and records each mutation in the
//! operation log, when one is configured.

use crate::audit::{AuditLogger, LogEntry};
use crate::error::CalculatorResult;
use crate::models::{Calculator, Operation};

/// A calculator plus an optional operation log
#[derive(Debug, Default)]
pub struct Session {
    calculator: Calculator,
    logger: Option<AuditLogger>,
}

impl Session {
    pub fn new(logger: Option<AuditLogger>) -> Self {
        Self {
            calculator: Calculator::new(),
            logger,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn total(&self) -> i64 {
        self.calculator.total()
    }

    /// Apply a single operation
    ///
    /// Returns the total for `Operation::Total` and `None` for mutations.
    /// If the log write fails the mutation has already been applied.
    pub fn apply(&mut self, op: Operation) -> CalculatorResult<Option<i64>> {
        let before = self.calculator.total();
        let result = op.apply(&mut self.calculator);

        if let Some(logger) = &self.logger {
            if let Some(entry) = LogEntry::for_operation(&op, before, self.calculator.total()) {
                logger.log(&entry)?;
            }
        }

        Ok(result)
    }

    /// Apply operations in order, collecting the totals read along the way
    pub fn run<I>(&mut self, ops: I) -> CalculatorResult<Vec<i64>>
    where
        I: IntoIterator<Item = Operation>,
    {
        let mut totals = Vec::new();
        for op in ops {
            if let Some(total) = self.apply(op)? {
                totals.push(total);
            }
        }
        Ok(totals)
    }
}
