pub mod condition;
pub mod enums;

pub use condition::{Condition, ConditionSummary, DEFAULT_SYMPTOM_WEIGHT};
pub use enums::{ConditionSeverity, EmergencyLevel, InvalidEnum, SeverityBucket};
