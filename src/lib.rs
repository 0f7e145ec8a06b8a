//! Calculator - a running-total accumulator
//!
//! The core is [`models::Calculator`]: one signed total with `add`,
//! `subtract` and `clear`. Everything else in the crate is the command line
//! around it.
//!
//! # Architecture
//!
//! - `models`: the accumulator, operations, and amount parsing
//! - `error`: custom error types
//! - `config`: path resolution and user settings
//! - `audit`: append-only operation log
//! - `services`: sessions that apply operations and log them
//! - `display`: terminal formatting
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```
//! use calculator::models::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.add(5);
//! calc.add(2);
//! calc.clear();
//! calc.subtract(5);
//! assert_eq!(calc.total(), -5);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::{CalculatorError, CalculatorResult};
pub use models::Calculator;
