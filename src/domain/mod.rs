//! Domain layer for the evaluation harness
//!
//! Dataset and run record models, the fatal error taxonomy, and the ports the
//! services are written against.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{HarnessError, HarnessResult};
