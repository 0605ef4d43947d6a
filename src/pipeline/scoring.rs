//! Weighted risk scoring of extracted symptoms against the condition catalog.
//!
//! Per condition:
//! - `raw = matched_weight * 100 / total_weight` (0 when the total is 0)
//! - boost once: ×1.15 for 4+ matches, ×1.05 for 2–3 matches, capped at 100
//! - `score = raw.round()`, halves rounding up
//!
//! Conditions without any matched symptom are dropped. Ranking is a stable
//! descending sort, so equal scores keep catalog order.

use super::types::ConditionScore;
use crate::models::{Condition, SeverityBucket};

/// Boost applied when at least this many symptoms match.
const STRONG_BOOST_MIN_MATCHES: usize = 4;
const STRONG_BOOST: f64 = 1.15;
const MILD_BOOST_MIN_MATCHES: usize = 2;
const MILD_BOOST: f64 = 1.05;

const MAX_SCORE: f64 = 100.0;

pub struct RiskScoringEngine;

impl RiskScoringEngine {
    /// Score every condition and rank those with at least one match.
    pub fn calculate(extracted: &[String], conditions: &[Condition]) -> Vec<ConditionScore> {
        let mut results: Vec<ConditionScore> = conditions
            .iter()
            .map(|condition| Self::score_condition(extracted, condition))
            .filter(|score| score.match_count > 0)
            .collect();

        // Vec::sort_by is stable
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }

    /// Score a single condition, including zero-match results.
    pub fn score_condition(extracted: &[String], condition: &Condition) -> ConditionScore {
        let mut total_weight = 0u32;
        let mut matched_weight = 0u32;
        let mut matched_symptoms = Vec::new();
        let mut unmatched_symptoms = Vec::new();

        for symptom in &condition.symptoms {
            let weight = condition.weight(symptom);
            total_weight += weight;
            if extracted.contains(symptom) {
                matched_weight += weight;
                matched_symptoms.push(symptom.clone());
            } else {
                unmatched_symptoms.push(symptom.clone());
            }
        }

        let match_count = matched_symptoms.len();
        let score = final_score(matched_weight, total_weight, match_count);

        ConditionScore {
            condition_id: condition.id.clone(),
            condition_name: condition.name.clone(),
            score,
            severity: SeverityBucket::from_score(score),
            match_count,
            total_symptoms: condition.symptoms.len(),
            matched_symptoms,
            unmatched_symptoms,
            is_emergency: condition.emergency,
            condition_severity: condition.severity,
            prevention: condition.prevention.clone(),
            recommendations: condition.recommendations.clone(),
        }
    }
}

fn final_score(matched_weight: u32, total_weight: u32, match_count: usize) -> u8 {
    let raw = if total_weight == 0 {
        0.0
    } else {
        f64::from(matched_weight) * 100.0 / f64::from(total_weight)
    };

    let boosted = if match_count >= STRONG_BOOST_MIN_MATCHES {
        (raw * STRONG_BOOST).min(MAX_SCORE)
    } else if match_count >= MILD_BOOST_MIN_MATCHES {
        (raw * MILD_BOOST).min(MAX_SCORE)
    } else {
        raw
    };

    // f64::round rounds halves away from zero; scores are never negative
    boosted.round().clamp(0.0, MAX_SCORE) as u8
}
