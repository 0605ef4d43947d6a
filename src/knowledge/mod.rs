//! Static medical knowledge: the condition catalog and the synonym table.
//!
//! Built once at startup and shared read-only across requests. Every
//! construction path runs `validate()`, so a malformed catalog fails at
//! startup instead of producing wrong scores later.

mod catalog;
mod synonyms;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Condition;

pub use catalog::builtin_conditions;
pub use synonyms::{builtin_synonyms, SynonymEntry};

/// Inclusive weight bounds for a condition's symptom.
pub const MIN_WEIGHT: u8 = 1;
pub const MAX_WEIGHT: u8 = 10;

#[derive(Error, Debug, PartialEq)]
pub enum KnowledgeError {
    #[error("Failed to read knowledge base '{0}': {1}")]
    Load(String, String),

    #[error("Failed to parse knowledge base: {0}")]
    Parse(String),

    #[error("Condition with empty id")]
    EmptyConditionId,

    #[error("Duplicate condition id '{0}'")]
    DuplicateCondition(String),

    #[error("Condition '{0}' lists no symptoms")]
    NoSymptoms(String),

    #[error("Condition '{condition}' has no weight for symptom '{symptom}'")]
    MissingWeight { condition: String, symptom: String },

    #[error("Condition '{condition}' weight {weight} for '{symptom}' is outside 1-10")]
    WeightOutOfRange {
        condition: String,
        symptom: String,
        weight: u8,
    },

    #[error("Condition '{condition}' weights unlisted symptom '{symptom}'")]
    UnlistedWeight { condition: String, symptom: String },

    #[error("Condition '{condition}' lists symptom '{symptom}' more than once")]
    DuplicateSymptom { condition: String, symptom: String },

    #[error("Symptom or phrase '{0}' must be lower-case")]
    NotLowercase(String),

    #[error("Duplicate synonym entry '{0}'")]
    DuplicateCanonical(String),

    #[error("Synonym entry '{0}' has no phrases")]
    EmptySynonyms(String),

    #[error("Synonym entry '{0}' does not include its canonical form")]
    CanonicalNotInSynonyms(String),
}

/// On-disk shape of an external catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeFile {
    pub conditions: Vec<Condition>,
    pub synonyms: Vec<SynonymEntry>,
}

/// Immutable condition catalog plus synonym table.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    conditions: Vec<Condition>,
    synonyms: Vec<SynonymEntry>,
}

impl KnowledgeBase {
    /// Build and validate a knowledge base from explicit parts.
    pub fn new(
        conditions: Vec<Condition>,
        synonyms: Vec<SynonymEntry>,
    ) -> Result<Self, KnowledgeError> {
        let kb = Self {
            conditions,
            synonyms,
        };
        kb.validate()?;
        kb.log_unreachable_symptoms();
        Ok(kb)
    }

    /// The bundled catalog.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        Self::new(builtin_conditions(), builtin_synonyms())
    }

    /// Parse a JSON catalog (`{"conditions": [...], "synonyms": [...]}`).
    pub fn from_json(json: &str) -> Result<Self, KnowledgeError> {
        let file: KnowledgeFile =
            serde_json::from_str(json).map_err(|e| KnowledgeError::Parse(e.to_string()))?;
        Self::new(file.conditions, file.synonyms)
    }

    /// Load a JSON catalog from disk.
    pub fn load(path: &Path) -> Result<Self, KnowledgeError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| KnowledgeError::Load(path.display().to_string(), e.to_string()))?;
        let kb = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            conditions = kb.conditions.len(),
            synonyms = kb.synonyms.len(),
            "Loaded external knowledge base"
        );
        Ok(kb)
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn synonyms(&self) -> &[SynonymEntry] {
        &self.synonyms
    }

    pub fn condition(&self, id: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.id == id)
    }

    /// Check catalog consistency. Called by every constructor.
    pub fn validate(&self) -> Result<(), KnowledgeError> {
        let mut ids = HashSet::new();
        for condition in &self.conditions {
            if condition.id.trim().is_empty() {
                return Err(KnowledgeError::EmptyConditionId);
            }
            if !ids.insert(condition.id.as_str()) {
                return Err(KnowledgeError::DuplicateCondition(condition.id.clone()));
            }
            validate_condition(condition)?;
        }

        let mut canonicals = HashSet::new();
        for entry in &self.synonyms {
            if !canonicals.insert(entry.canonical.as_str()) {
                return Err(KnowledgeError::DuplicateCanonical(entry.canonical.clone()));
            }
            if entry.phrases.is_empty() {
                return Err(KnowledgeError::EmptySynonyms(entry.canonical.clone()));
            }
            // Input is lower-cased before matching
            if let Some(bad) = std::iter::once(&entry.canonical)
                .chain(&entry.phrases)
                .find(|p| !is_lowercase(p))
            {
                return Err(KnowledgeError::NotLowercase(bad.clone()));
            }
            if !entry.phrases.contains(&entry.canonical) {
                return Err(KnowledgeError::CanonicalNotInSynonyms(entry.canonical.clone()));
            }
        }

        Ok(())
    }

    /// Symptoms no synonym entry produces can never match. Kept, but noted.
    fn log_unreachable_symptoms(&self) {
        let reachable: HashSet<&str> = self.synonyms.iter().map(|e| e.canonical.as_str()).collect();
        for condition in &self.conditions {
            for symptom in &condition.symptoms {
                if !reachable.contains(symptom.as_str()) {
                    tracing::debug!(
                        condition = %condition.id,
                        symptom = %symptom,
                        "Symptom has no synonym entry and cannot be matched"
                    );
                }
            }
        }
    }
}

fn validate_condition(condition: &Condition) -> Result<(), KnowledgeError> {
    if condition.symptoms.is_empty() {
        return Err(KnowledgeError::NoSymptoms(condition.id.clone()));
    }

    let mut seen = HashSet::new();
    for symptom in &condition.symptoms {
        if !seen.insert(symptom.as_str()) {
            return Err(KnowledgeError::DuplicateSymptom {
                condition: condition.id.clone(),
                symptom: symptom.clone(),
            });
        }
        if !is_lowercase(symptom) {
            return Err(KnowledgeError::NotLowercase(symptom.clone()));
        }
        let weight = condition
            .weights
            .get(symptom)
            .ok_or_else(|| KnowledgeError::MissingWeight {
                condition: condition.id.clone(),
                symptom: symptom.clone(),
            })?;
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(weight) {
            return Err(KnowledgeError::WeightOutOfRange {
                condition: condition.id.clone(),
                symptom: symptom.clone(),
                weight: *weight,
            });
        }
    }

    if let Some(extra) = condition
        .weights
        .keys()
        .find(|k| !condition.symptoms.contains(*k))
    {
        return Err(KnowledgeError::UnlistedWeight {
            condition: condition.id.clone(),
            symptom: extra.clone(),
        });
    }

    Ok(())
}

fn is_lowercase(text: &str) -> bool {
    text == text.to_lowercase()
}
