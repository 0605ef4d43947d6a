//! Built-in condition catalog.
//!
//! Order is significant: ranking ties keep this order.

use crate::models::{Condition, ConditionSeverity};

struct Entry {
    id: &'static str,
    name: &'static str,
    symptoms: &'static [(&'static str, u8)],
    risk_factors: &'static [&'static str],
    emergency: bool,
    severity: ConditionSeverity,
    prevention: &'static [&'static str],
    recommendations: &'static [&'static str],
}

impl Entry {
    fn build(&self) -> Condition {
        Condition {
            id: self.id.to_string(),
            name: self.name.to_string(),
            symptoms: self.symptoms.iter().map(|(s, _)| s.to_string()).collect(),
            weights: self
                .symptoms
                .iter()
                .map(|(s, w)| (s.to_string(), *w))
                .collect(),
            risk_factors: to_strings(self.risk_factors),
            emergency: self.emergency,
            severity: self.severity,
            prevention: to_strings(self.prevention),
            recommendations: to_strings(self.recommendations),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const CATALOG: &[Entry] = &[
    Entry {
        id: "heart_attack",
        name: "Heart Attack",
        symptoms: &[
            ("chest pain", 10),
            ("chest tightness", 10),
            ("sweating", 7),
            ("nausea", 6),
            ("shortness of breath", 8),
            ("arm pain", 8),
            ("jaw pain", 7),
        ],
        risk_factors: &["age", "smoking", "diabetes", "hypertension", "family history"],
        emergency: true,
        severity: ConditionSeverity::Critical,
        prevention: &["Regular exercise", "Healthy diet", "Quit smoking", "Manage stress", "Regular checkups"],
        recommendations: &[
            "Call emergency services immediately",
            "Chew aspirin if available",
            "Rest in comfortable position",
            "Do not drive yourself",
        ],
    },
    Entry {
        id: "stroke",
        name: "Stroke",
        symptoms: &[
            ("sudden headache", 9),
            ("confusion", 9),
            ("trouble speaking", 10),
            ("numbness", 8),
            ("weakness", 8),
            ("vision problems", 7),
            ("dizziness", 6),
            ("loss of balance", 7),
        ],
        risk_factors: &["age", "hypertension", "diabetes", "smoking", "heart disease"],
        emergency: true,
        severity: ConditionSeverity::Critical,
        prevention: &[
            "Control blood pressure",
            "Maintain healthy weight",
            "Exercise regularly",
            "Limit alcohol",
            "Manage diabetes",
        ],
        recommendations: &[
            "Call emergency services immediately",
            "Note the time symptoms started",
            "Do not give food or water",
            "Stay calm and rest",
        ],
    },
    Entry {
        id: "migraine",
        name: "Migraine",
        symptoms: &[
            ("severe headache", 9),
            ("throbbing pain", 8),
            ("sensitivity to light", 7),
            ("sensitivity to sound", 6),
            ("nausea", 6),
            ("vomiting", 5),
            ("aura", 8),
        ],
        risk_factors: &["family history", "hormonal changes", "stress", "certain foods"],
        emergency: false,
        severity: ConditionSeverity::Moderate,
        prevention: &["Identify triggers", "Regular sleep schedule", "Stay hydrated", "Manage stress", "Limit caffeine"],
        recommendations: &[
            "Rest in dark quiet room",
            "Apply cold compress",
            "Take prescribed medication",
            "Stay hydrated",
        ],
    },
    Entry {
        id: "anxiety_attack",
        name: "Anxiety Attack",
        symptoms: &[
            ("rapid heartbeat", 8),
            ("sweating", 6),
            ("trembling", 7),
            ("shortness of breath", 7),
            ("chest tightness", 6),
            ("dizziness", 5),
            ("fear", 8),
            ("nausea", 4),
        ],
        risk_factors: &["stress", "trauma", "genetics", "substance use"],
        emergency: false,
        severity: ConditionSeverity::Moderate,
        prevention: &["Regular exercise", "Meditation", "Adequate sleep", "Limit caffeine", "Therapy"],
        recommendations: &[
            "Practice deep breathing",
            "Use grounding techniques",
            "Remove yourself from triggers",
            "Seek professional help if recurrent",
        ],
    },
    Entry {
        id: "common_cold",
        name: "Common Cold",
        symptoms: &[
            ("runny nose", 7),
            ("sneezing", 6),
            ("cough", 6),
            ("sore throat", 5),
            ("mild fever", 4),
            ("congestion", 6),
            ("fatigue", 5),
        ],
        risk_factors: &["season", "exposure to sick people", "weakened immune system"],
        emergency: false,
        severity: ConditionSeverity::Low,
        prevention: &[
            "Wash hands frequently",
            "Avoid touching face",
            "Stay away from sick people",
            "Boost immune system",
        ],
        recommendations: &[
            "Rest and hydrate",
            "Over-the-counter cold medicine",
            "Warm salt water gargle",
            "Use humidifier",
        ],
    },
    Entry {
        id: "influenza",
        name: "Influenza (Flu)",
        symptoms: &[
            ("fever", 8),
            ("chills", 7),
            ("body aches", 8),
            ("fatigue", 7),
            ("cough", 6),
            ("sore throat", 5),
            ("headache", 6),
            ("congestion", 5),
        ],
        risk_factors: &["season", "no vaccination", "age", "chronic conditions"],
        emergency: false,
        severity: ConditionSeverity::Moderate,
        prevention: &[
            "Annual flu vaccine",
            "Wash hands frequently",
            "Avoid close contact",
            "Stay home when sick",
        ],
        recommendations: &[
            "Rest and hydrate",
            "Take antiviral medication if prescribed",
            "Use fever reducers",
            "Seek care if symptoms worsen",
        ],
    },
    Entry {
        id: "food_poisoning",
        name: "Food Poisoning",
        symptoms: &[
            ("nausea", 7),
            ("vomiting", 8),
            ("diarrhea", 8),
            ("stomach cramps", 7),
            ("fever", 5),
            ("weakness", 6),
            ("dehydration", 9),
        ],
        risk_factors: &[
            "contaminated food",
            "improper food handling",
            "travel",
            "weakened immune system",
        ],
        emergency: false,
        severity: ConditionSeverity::Moderate,
        prevention: &[
            "Proper food handling",
            "Cook food thoroughly",
            "Refrigerate promptly",
            "Wash hands before eating",
        ],
        recommendations: &[
            "Stay hydrated",
            "Rest",
            "Eat bland foods when able",
            "Seek care if severe dehydration",
        ],
    },
    Entry {
        id: "appendicitis",
        name: "Appendicitis",
        symptoms: &[
            ("abdominal pain", 10),
            ("nausea", 6),
            ("vomiting", 6),
            ("fever", 5),
            ("loss of appetite", 5),
            ("swelling", 7),
            ("tenderness", 8),
        ],
        risk_factors: &["age", "family history", "male gender"],
        emergency: true,
        severity: ConditionSeverity::Critical,
        prevention: &["High fiber diet", "Maintain healthy weight"],
        recommendations: &[
            "Seek immediate medical attention",
            "Do not eat or drink",
            "Do not take laxatives",
            "Surgery may be required",
        ],
    },
    Entry {
        id: "pneumonia",
        name: "Pneumonia",
        symptoms: &[
            ("cough", 7),
            ("fever", 8),
            ("chills", 7),
            ("shortness of breath", 9),
            ("chest pain", 7),
            ("fatigue", 6),
            ("sweating", 5),
            ("confusion", 8),
        ],
        risk_factors: &["age", "chronic conditions", "weakened immune system", "smoking"],
        emergency: false,
        severity: ConditionSeverity::High,
        prevention: &["Vaccination", "Hand hygiene", "Don't smoke", "Healthy lifestyle"],
        recommendations: &[
            "See doctor promptly",
            "Take prescribed antibiotics",
            "Rest and hydrate",
            "Monitor symptoms closely",
        ],
    },
    Entry {
        id: "diabetes_type2",
        name: "Type 2 Diabetes",
        symptoms: &[
            ("increased thirst", 8),
            ("frequent urination", 8),
            ("fatigue", 6),
            ("blurred vision", 7),
            ("slow healing", 6),
            ("numbness", 7),
            ("weight loss", 6),
        ],
        risk_factors: &["obesity", "family history", "age", "sedentary lifestyle", "poor diet"],
        emergency: false,
        severity: ConditionSeverity::High,
        prevention: &[
            "Healthy diet",
            "Regular exercise",
            "Maintain healthy weight",
            "Regular screening",
        ],
        recommendations: &[
            "See doctor for testing",
            "Monitor blood sugar",
            "Lifestyle modifications",
            "Medication if prescribed",
        ],
    },
    Entry {
        id: "hypertension",
        name: "Hypertension (High Blood Pressure)",
        symptoms: &[
            ("headache", 6),
            ("dizziness", 6),
            ("chest pain", 8),
            ("shortness of breath", 7),
            ("nosebleeds", 5),
            ("flushing", 4),
            ("vision changes", 7),
        ],
        risk_factors: &[
            "age",
            "family history",
            "obesity",
            "sedentary lifestyle",
            "high sodium diet",
            "stress",
        ],
        emergency: false,
        severity: ConditionSeverity::High,
        prevention: &[
            "Reduce sodium intake",
            "Exercise regularly",
            "Maintain healthy weight",
            "Limit alcohol",
            "Manage stress",
        ],
        recommendations: &[
            "Regular blood pressure monitoring",
            "Take prescribed medication",
            "Lifestyle changes",
            "Regular doctor visits",
        ],
    },
    Entry {
        id: "allergic_reaction",
        name: "Allergic Reaction",
        symptoms: &[
            ("sneezing", 6),
            ("itchy eyes", 7),
            ("runny nose", 5),
            ("watery eyes", 6),
            ("congestion", 5),
            ("skin rash", 7),
            ("swelling", 8),
            ("difficulty breathing", 10),
        ],
        risk_factors: &["family history", "exposure to allergens", "seasonal factors"],
        emergency: true,
        severity: ConditionSeverity::Critical,
        prevention: &[
            "Avoid known allergens",
            "Use air purifiers",
            "Keep windows closed during high pollen",
            "Read food labels carefully",
        ],
        recommendations: &[
            "Use antihistamines",
            "Seek emergency care if breathing difficulty",
            "Use epinephrine if prescribed",
            "Identify and avoid triggers",
        ],
    },
    Entry {
        id: "gastroenteritis",
        name: "Gastroenteritis",
        symptoms: &[
            ("diarrhea", 8),
            ("nausea", 7),
            ("vomiting", 7),
            ("stomach cramps", 7),
            ("fever", 5),
            ("headache", 4),
            ("muscle aches", 4),
            ("dehydration", 9),
        ],
        risk_factors: &[
            "contaminated food/water",
            "close contact with infected person",
            "weakened immune system",
        ],
        emergency: false,
        severity: ConditionSeverity::Moderate,
        prevention: &["Hand washing", "Safe food preparation", "Drink clean water", "Avoid sick contacts"],
        recommendations: &[
            "Stay hydrated with electrolytes",
            "Rest",
            "Eat bland foods",
            "Seek care if severe symptoms",
        ],
    },
    Entry {
        id: "urinary_tract_infection",
        name: "Urinary Tract Infection",
        symptoms: &[
            ("burning urination", 10),
            ("frequent urination", 8),
            ("urgent urination", 7),
            ("cloudy urine", 6),
            ("blood in urine", 8),
            ("pelvic pain", 6),
            ("fever", 5),
        ],
        risk_factors: &[
            "female anatomy",
            "sexual activity",
            "menopause",
            "urinary tract abnormalities",
        ],
        emergency: false,
        severity: ConditionSeverity::Moderate,
        prevention: &[
            "Drink plenty of water",
            "Wipe front to back",
            "Urinate after intercourse",
            "Avoid irritating feminine products",
        ],
        recommendations: &[
            "See doctor for antibiotics",
            "Drink cranberry juice",
            "Stay hydrated",
            "Complete full antibiotic course",
        ],
    },
    Entry {
        id: "asthma_attack",
        name: "Asthma Attack",
        symptoms: &[
            ("shortness of breath", 10),
            ("chest tightness", 9),
            ("wheezing", 9),
            ("coughing", 6),
            ("rapid breathing", 8),
            ("anxiety", 5),
            ("sweating", 4),
        ],
        risk_factors: &["allergies", "respiratory infections", "exercise", "cold air", "stress"],
        emergency: true,
        severity: ConditionSeverity::Critical,
        prevention: &[
            "Avoid triggers",
            "Take controller medications",
            "Use inhaler before exercise",
            "Get flu vaccine",
        ],
        recommendations: &[
            "Use rescue inhaler immediately",
            "Sit upright",
            "Try to stay calm",
            "Call emergency if no relief",
        ],
    },
];

/// Build the bundled catalog in its fixed order.
pub fn builtin_conditions() -> Vec<Condition> {
    CATALOG.iter().map(Entry::build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_fifteen_conditions_in_order() {
        let conditions = builtin_conditions();
        assert_eq!(conditions.len(), 15);
        assert_eq!(conditions[0].id, "heart_attack");
        assert_eq!(conditions[4].id, "common_cold");
        assert_eq!(conditions[14].id, "asthma_attack");
    }

    #[test]
    fn every_symptom_has_a_weight() {
        for condition in builtin_conditions() {
            assert_eq!(condition.symptoms.len(), condition.weights.len(), "{}", condition.id);
            for symptom in &condition.symptoms {
                assert!(condition.weights.contains_key(symptom), "{}: {symptom}", condition.id);
            }
        }
    }

    #[test]
    fn heart_attack_weights_match_catalog() {
        let conditions = builtin_conditions();
        let heart = &conditions[0];
        assert!(heart.emergency);
        assert_eq!(heart.weight("chest pain"), 10);
        assert_eq!(heart.weight("sweating"), 7);
        assert_eq!(heart.total_weight(), 56);
    }
}
