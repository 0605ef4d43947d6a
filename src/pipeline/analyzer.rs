//! Single entry point for symptom analysis:
//! validate → process → score → generate insight.
//!
//! Pure with respect to its input: the knowledge base is shared read-only,
//! so one `SymptomAnalyzer` serves any number of concurrent callers.

use std::sync::Arc;

use super::insight::InsightGenerator;
use super::processor::SymptomProcessor;
use super::scoring::RiskScoringEngine;
use super::types::{AnalysisResult, InputAnalysis, DISCLAIMER, MAX_RANKED_RESULTS};
use super::validate::{validate, ValidationError};
use crate::knowledge::KnowledgeBase;

#[derive(Clone)]
pub struct SymptomAnalyzer {
    knowledge: Arc<KnowledgeBase>,
}

impl SymptomAnalyzer {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Validate raw text, then analyze its sanitized form.
    pub fn analyze(&self, raw: &str) -> Result<AnalysisResult, ValidationError> {
        let sanitized = validate(raw)?;
        Ok(self.analyze_sanitized(&sanitized))
    }

    /// Analyze text that already passed validation. Does not re-validate.
    pub fn analyze_sanitized(&self, sanitized: &str) -> AnalysisResult {
        let processed = SymptomProcessor::new(self.knowledge.synonyms()).process(sanitized);

        let ranked =
            RiskScoringEngine::calculate(&processed.extracted_symptoms, self.knowledge.conditions());

        let insight = InsightGenerator::generate(&processed, &ranked, processed.emergency_level);

        match ranked.first() {
            Some(top) => tracing::info!(
                top_condition = %top.condition_id,
                score = top.score,
                symptoms = processed.symptom_count,
                emergency = %processed.emergency_level,
                "Analysis complete"
            ),
            None => tracing::info!(
                emergency = %processed.emergency_level,
                "Analysis complete, no matching condition"
            ),
        }

        AnalysisResult {
            input_analysis: InputAnalysis {
                extracted_symptoms: processed.extracted_symptoms.clone(),
                symptom_count: processed.symptom_count,
                emergency_detected: processed.emergency_level.is_emergency(),
                emergency_level: processed.emergency_level,
            },
            risk_assessment: ranked.into_iter().take(MAX_RANKED_RESULTS).collect(),
            insight,
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmergencyLevel, SeverityBucket};

    fn analyzer() -> SymptomAnalyzer {
        SymptomAnalyzer::new(Arc::new(KnowledgeBase::builtin().unwrap()))
    }

    #[test]
    fn chest_pain_is_critical_with_heart_attack_on_top() {
        let result = analyzer().analyze("I have chest pain and sweating").unwrap();
        assert_eq!(
            result.input_analysis.extracted_symptoms,
            vec!["chest pain", "sweating"]
        );
        assert_eq!(result.input_analysis.emergency_level, EmergencyLevel::Critical);
        assert!(result.input_analysis.emergency_detected);

        let top = &result.risk_assessment[0];
        assert_eq!(top.condition_id, "heart_attack");
        assert!(top.is_emergency);
        assert_eq!(result.insight.safety_note.len(), 4);
    }

    #[test]
    fn runny_nose_and_sneezing_is_not_an_emergency() {
        let result = analyzer().analyze("runny nose and sneezing").unwrap();
        assert_eq!(
            result.input_analysis.extracted_symptoms,
            vec!["runny nose", "sneezing"]
        );
        assert_eq!(result.input_analysis.emergency_level, EmergencyLevel::None);
        assert!(!result.input_analysis.emergency_detected);

        let ids: Vec<&str> = result
            .risk_assessment
            .iter()
            .map(|r| r.condition_id.as_str())
            .collect();
        assert_eq!(ids[0], "common_cold");
        assert!(ids.contains(&"allergic_reaction"));
        assert!(result
            .risk_assessment
            .iter()
            .all(|r| r.severity != SeverityBucket::Critical));
    }

    #[test]
    fn unrecognized_symptoms_give_no_match_insight() {
        let result = analyzer().analyze("my elbow looks purple").unwrap();
        assert!(result.risk_assessment.is_empty());
        assert_eq!(result.input_analysis.symptom_count, 0);
        assert_eq!(
            result.insight.summary,
            "We couldn't find a strong match for your symptoms in our database."
        );
        assert_eq!(result.disclaimer, DISCLAIMER);
    }

    #[test]
    fn ranked_results_capped_at_five() {
        let result = analyzer()
            .analyze("fever, cough, nausea, fatigue, headache, dizzy, chills and sweating")
            .unwrap();
        assert_eq!(result.risk_assessment.len(), MAX_RANKED_RESULTS);
        for pair in result.risk_assessment.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn invalid_input_rejected_before_processing() {
        let analyzer = analyzer();
        assert_eq!(analyzer.analyze("hi").unwrap_err(), ValidationError::TooShort);
        assert_eq!(
            analyzer.analyze(&"x".repeat(501)).unwrap_err(),
            ValidationError::TooLong
        );
        assert_eq!(
            analyzer.analyze("<script>x</script>").unwrap_err(),
            ValidationError::RejectedPattern
        );
    }

    #[test]
    fn analysis_is_idempotent() {
        let analyzer = analyzer();
        let input = "high fever, chills, body aches and a bad headache";
        let first = serde_json::to_string(&analyzer.analyze(input).unwrap()).unwrap();
        let second = serde_json::to_string(&analyzer.analyze(input).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_callers_share_one_analyzer() {
        let analyzer = analyzer();
        let expected = analyzer.analyze("wheezing and shortness of breath").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let analyzer = analyzer.clone();
                std::thread::spawn(move || {
                    analyzer.analyze("wheezing and shortness of breath").unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
