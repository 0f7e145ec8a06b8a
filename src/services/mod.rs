//! Service layer
//!
//! Sits between the command line and the models: drives a calculator and
//! keeps the operation log in step with it.

pub mod session;

pub use session::Session;
