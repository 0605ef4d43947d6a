//! Deterministic insight text built from ranked scores.
//!
//! Summary and next-step wording are ordered decision tables: the first
//! matching row wins, and the emergency rows always come before any
//! score-based row.

use super::types::{
    AdditionalConsideration, ConditionScore, Insight, PreventiveGuidance, ProcessedInput,
};
use crate::models::EmergencyLevel;

/// Top score at or above this is a strong match.
pub const STRONG_MATCH_SCORE: u8 = 70;
/// Top score at or above this is a moderate match.
pub const MODERATE_MATCH_SCORE: u8 = 40;
/// Top score at or above this gets the see-a-doctor protocol.
pub const SEE_DOCTOR_SCORE: u8 = 60;

/// Number of runner-up conditions listed after the top one.
const MAX_ADDITIONAL_CONSIDERATIONS: usize = 3;

/// Condition recommendations appended to the see-a-doctor protocol.
const APPENDED_RECOMMENDATIONS: usize = 2;

const EMERGENCY_STEPS: [&str; 4] = [
    "Call emergency services (911) immediately",
    "Do not drive yourself to the hospital",
    "Have someone stay with you",
    "Follow any emergency instructions given",
];

const SEE_DOCTOR_STEPS: [&str; 4] = [
    "Schedule an appointment with your doctor within 24-48 hours",
    "Monitor your symptoms closely",
    "Rest and avoid strenuous activities",
    "Keep a symptom diary",
];

const SELF_CARE_STEPS: [&str; 4] = [
    "Monitor your symptoms for the next few days",
    "Get plenty of rest and stay hydrated",
    "Consider over-the-counter remedies if appropriate",
    "Consult a doctor if symptoms worsen or persist",
];

const SAFETY_NOTES: [&str; 3] = [
    "This analysis is for educational purposes only and does not constitute medical advice.",
    "Always consult with a qualified healthcare professional for proper diagnosis and treatment.",
    "If you are experiencing severe symptoms or believe you have a medical emergency, call 911 immediately.",
];

const CRITICAL_WARNING: &str = "WARNING: Your symptoms may indicate a life-threatening emergency.";

const NO_MATCH_STEPS: [&str; 4] = [
    "Monitor your symptoms",
    "Stay hydrated and get rest",
    "Consult a healthcare professional if symptoms persist",
    "Consider keeping a symptom diary",
];

const NO_MATCH_SAFETY_NOTES: [&str; 2] = [
    "This tool provides educational information only.",
    "When in doubt, always consult a medical professional.",
];

pub struct InsightGenerator;

impl InsightGenerator {
    /// Build the insight for a ranked result list (best first).
    pub fn generate(
        processed: &ProcessedInput,
        ranked: &[ConditionScore],
        emergency_level: EmergencyLevel,
    ) -> Insight {
        let Some(top) = ranked.first() else {
            tracing::debug!(symptoms = processed.symptom_count, "No condition matched");
            return no_match();
        };

        Insight {
            summary: summary(top, emergency_level),
            risk_explanation: risk_explanation(top),
            preventive_guidance: preventive_guidance(top),
            next_steps: next_steps(top, emergency_level),
            safety_note: safety_note(emergency_level),
            additional_considerations: additional_considerations(ranked),
        }
    }
}

/// Fixed insight when no condition matched.
fn no_match() -> Insight {
    Insight {
        summary: "We couldn't find a strong match for your symptoms in our database.".to_string(),
        risk_explanation: "Your symptoms may be non-specific or could indicate a condition not covered in our knowledge base."
            .to_string(),
        preventive_guidance: None,
        next_steps: to_strings(&NO_MATCH_STEPS),
        safety_note: to_strings(&NO_MATCH_SAFETY_NOTES),
        additional_considerations: Vec::new(),
    }
}

fn summary(top: &ConditionScore, emergency_level: EmergencyLevel) -> String {
    match (emergency_level, top.score) {
        (EmergencyLevel::Critical, _) => {
            "Your symptoms indicate a potentially life-threatening condition that requires immediate medical attention."
                .to_string()
        }
        (EmergencyLevel::Urgent, _) => {
            "Your symptoms suggest a serious condition that should be evaluated by a medical professional as soon as possible."
                .to_string()
        }
        (_, score) if score >= STRONG_MATCH_SCORE => format!(
            "Your symptoms show a strong match with {}. Medical evaluation is recommended.",
            top.condition_name
        ),
        (_, score) if score >= MODERATE_MATCH_SCORE => format!(
            "Your symptoms show a moderate match with {}. Consider consulting a healthcare provider.",
            top.condition_name
        ),
        _ => "Your symptoms show a mild match with several conditions. Monitor your symptoms and consult a doctor if they persist or worsen."
            .to_string(),
    }
}

fn risk_explanation(top: &ConditionScore) -> String {
    let mut sentences = vec![
        format!(
            "Based on your reported symptoms, our analysis found {} out of {} typical symptoms for {}.",
            top.matched_symptoms.len(),
            top.total_symptoms,
            top.condition_name
        ),
        format!(
            "The risk score of {}% indicates a {} level of concern.",
            top.score, top.severity
        ),
    ];

    if !top.matched_symptoms.is_empty() {
        sentences.push(format!(
            "Matching symptoms include: {}.",
            top.matched_symptoms.join(", ")
        ));
    }

    sentences.join(" ")
}

fn preventive_guidance(top: &ConditionScore) -> Option<PreventiveGuidance> {
    if top.prevention.is_empty() {
        return None;
    }
    Some(PreventiveGuidance {
        title: format!("Prevention Tips for {}", top.condition_name),
        tips: top.prevention.clone(),
    })
}

fn next_steps(top: &ConditionScore, emergency_level: EmergencyLevel) -> Vec<String> {
    match (emergency_level, top.is_emergency, top.score) {
        (EmergencyLevel::Critical, _, _) | (_, true, _) => to_strings(&EMERGENCY_STEPS),
        (_, _, score) if score >= SEE_DOCTOR_SCORE => {
            let mut steps = to_strings(&SEE_DOCTOR_STEPS);
            steps.extend(
                top.recommendations
                    .iter()
                    .take(APPENDED_RECOMMENDATIONS)
                    .cloned(),
            );
            steps
        }
        _ => to_strings(&SELF_CARE_STEPS),
    }
}

fn safety_note(emergency_level: EmergencyLevel) -> Vec<String> {
    let mut notes = Vec::with_capacity(SAFETY_NOTES.len() + 1);
    if emergency_level == EmergencyLevel::Critical {
        notes.push(CRITICAL_WARNING.to_string());
    }
    notes.extend(SAFETY_NOTES.iter().map(|s| s.to_string()));
    notes
}

fn additional_considerations(ranked: &[ConditionScore]) -> Vec<AdditionalConsideration> {
    ranked
        .iter()
        .skip(1)
        .take(MAX_ADDITIONAL_CONSIDERATIONS)
        .map(|c| AdditionalConsideration {
            name: c.condition_name.clone(),
            score: c.score,
            severity: c.severity,
        })
        .collect()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
