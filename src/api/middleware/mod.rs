//! API middleware stack.
//!
//! Execution order (outermost → innermost):
//! 1. Access logger, every route
//! 2. Rate limiter, `/analyze` only

pub mod audit;
pub mod rate;
