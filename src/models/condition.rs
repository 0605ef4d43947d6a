use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::enums::ConditionSeverity;

/// Weight used when a condition lists a symptom without a weight entry.
pub const DEFAULT_SYMPTOM_WEIGHT: u32 = 5;

/// A condition entry in the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: String,
    pub name: String,
    /// Ordered; drives the order of matched/unmatched lists in scores.
    pub symptoms: Vec<String>,
    pub weights: BTreeMap<String, u8>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    pub emergency: bool,
    pub severity: ConditionSeverity,
    #[serde(default)]
    pub prevention: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl Condition {
    /// Scoring weight for a symptom of this condition.
    pub fn weight(&self, symptom: &str) -> u32 {
        self.weights
            .get(symptom)
            .map(|w| u32::from(*w))
            .unwrap_or(DEFAULT_SYMPTOM_WEIGHT)
    }

    /// Sum of weights over the full symptom list.
    pub fn total_weight(&self) -> u32 {
        self.symptoms.iter().map(|s| self.weight(s)).sum()
    }

    /// Weights keyed by symptom, serialized in symptom-list order.
    pub fn ordered_weights(&self) -> OrderedWeights<'_> {
        OrderedWeights(self)
    }
}

/// Serializes a condition's weights as a map in catalog order.
pub struct OrderedWeights<'a>(&'a Condition);

impl Serialize for OrderedWeights<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.symptoms.len()))?;
        for symptom in &self.0.symptoms {
            map.serialize_entry(symptom, &self.0.weight(symptom))?;
        }
        map.end()
    }
}

/// Short form of a condition used by the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionSummary {
    pub id: String,
    pub name: String,
    pub emergency: bool,
    pub severity: ConditionSeverity,
}

impl From<&Condition> for ConditionSummary {
    fn from(condition: &Condition) -> Self {
        Self {
            id: condition.id.clone(),
            name: condition.name.clone(),
            emergency: condition.emergency,
            severity: condition.severity,
        }
    }
}
