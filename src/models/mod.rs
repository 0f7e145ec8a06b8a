//! Core data models for the calculator
//!
//! The accumulator itself, the operations that drive it, and the parser for
//! textual amounts.

pub mod amount;
pub mod calculator;
pub mod operation;

pub use amount::parse_amount;
pub use calculator::Calculator;
pub use operation::Operation;
