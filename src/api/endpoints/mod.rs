//! API endpoint handlers.

pub mod analyze;
pub mod conditions;
pub mod health;
