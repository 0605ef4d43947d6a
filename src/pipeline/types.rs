use serde::{Deserialize, Serialize};

use crate::models::{ConditionSeverity, EmergencyLevel, SeverityBucket};

/// Number of ranked conditions included in an analysis result.
pub const MAX_RANKED_RESULTS: usize = 5;

/// Appended verbatim to every successful analysis.
pub const DISCLAIMER: &str = "This analysis is for educational purposes only and does not constitute medical advice. Always consult a qualified healthcare professional.";

/// Per-request view of the user's text after symptom processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedInput {
    pub original_input: String,
    /// Lower-cased word tokens with stop-words removed.
    pub processed_tokens: Vec<String>,
    /// Canonical symptoms in synonym-table order, deduplicated.
    pub extracted_symptoms: Vec<String>,
    pub emergency_level: EmergencyLevel,
    pub symptom_count: usize,
}

/// Weighted match of the extracted symptoms against one condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionScore {
    pub condition_id: String,
    pub condition_name: String,
    /// Always within 0..=100.
    pub score: u8,
    pub severity: SeverityBucket,
    pub match_count: usize,
    pub total_symptoms: usize,
    pub matched_symptoms: Vec<String>,
    pub unmatched_symptoms: Vec<String>,
    pub is_emergency: bool,
    pub condition_severity: ConditionSeverity,
    pub prevention: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreventiveGuidance {
    pub title: String,
    pub tips: Vec<String>,
}

/// A runner-up condition reduced to its headline numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalConsideration {
    pub name: String,
    pub score: u8,
    pub severity: SeverityBucket,
}

/// Human-readable guidance generated from the ranked scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub summary: String,
    pub risk_explanation: String,
    pub preventive_guidance: Option<PreventiveGuidance>,
    pub next_steps: Vec<String>,
    pub safety_note: Vec<String>,
    pub additional_considerations: Vec<AdditionalConsideration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputAnalysis {
    pub extracted_symptoms: Vec<String>,
    pub symptom_count: usize,
    pub emergency_detected: bool,
    pub emergency_level: EmergencyLevel,
}

/// Everything `analyze` returns for a valid input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub input_analysis: InputAnalysis,
    /// Top ranked conditions, at most `MAX_RANKED_RESULTS`.
    pub risk_assessment: Vec<ConditionScore>,
    pub insight: Insight,
    pub disclaimer: String,
}
