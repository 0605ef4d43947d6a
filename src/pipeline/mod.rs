pub mod analyzer;
pub mod insight;
pub mod processor;
pub mod scoring;
pub mod types;
pub mod validate;

pub use analyzer::SymptomAnalyzer;
pub use types::{AnalysisResult, DISCLAIMER, MAX_RANKED_RESULTS};
pub use validate::ValidationError;
