use serde::{Deserialize, Serialize};

/// One canonical symptom and the surface phrases that map to it.
///
/// Phrases are tried in list order; the canonical form is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub canonical: String,
    pub phrases: Vec<String>,
}

const SYNONYMS: &[(&str, &[&str])] = &[
    ("chest pain", &["chest pain", "chest ache", "chest discomfort", "tight chest", "chest pressure", "chest tightness"]),
    ("sweating", &["sweating", "sweaty", "perspiration", "clammy"]),
    ("shortness of breath", &["shortness of breath", "breathless", "difficulty breathing", "can't breathe", "labored breathing"]),
    ("nausea", &["nausea", "nauseous", "feel sick", "queasy", "upset stomach"]),
    ("vomiting", &["vomiting", "throwing up", "puking", "vomit"]),
    ("headache", &["headache", "head pain", "migraine", "head ache"]),
    ("severe headache", &["severe headache", "intense headache", "bad headache", "throbbing headache"]),
    ("fever", &["fever", "high temperature", "feverish", "running a fever"]),
    ("fatigue", &["fatigue", "tired", "exhausted", "weak", "no energy", "lethargic"]),
    ("dizziness", &["dizziness", "dizzy", "lightheaded", "vertigo"]),
    ("abdominal pain", &["abdominal pain", "stomach pain", "belly pain", "tummy ache", "stomach ache"]),
    ("diarrhea", &["diarrhea", "loose stool", "watery stool", "runs"]),
    ("cough", &["cough", "coughing", "hacking"]),
    ("sore throat", &["sore throat", "throat pain", "scratchy throat", "painful throat"]),
    ("runny nose", &["runny nose", "runny nostril", "nasal discharge"]),
    ("congestion", &["congestion", "stuffy nose", "nasal congestion", "blocked nose"]),
    ("sneezing", &["sneezing", "sneeze", "sneezy"]),
    ("rapid heartbeat", &["rapid heartbeat", "racing heart", "heart palpitations", "fast heartbeat"]),
    ("trembling", &["trembling", "shaking", "shivering", "tremors"]),
    ("numbness", &["numbness", "numb", "tingling", "pins and needles"]),
    ("confusion", &["confusion", "confused", "disoriented", "mental fog"]),
    ("vision problems", &["vision problems", "blurred vision", "double vision", "can't see", "vision changes"]),
    ("loss of balance", &["loss of balance", "unsteady", "balance problems", "falling"]),
    ("swelling", &["swelling", "swollen", "inflamed", "puffy"]),
    ("skin rash", &["skin rash", "rash", "hives", "skin irritation"]),
    ("itchy eyes", &["itchy eyes", "eye itching", "irritated eyes"]),
    ("burning urination", &["burning urination", "burning when peeing", "painful urination", "pee burns"]),
    ("frequent urination", &["frequent urination", "peeing often", "urinating frequently"]),
    ("wheezing", &["wheezing", "wheeze", "whistling sound when breathing"]),
    ("chills", &["chills", "shivering", "feeling cold", "rigors"]),
    ("body aches", &["body aches", "muscle pain", "body pain", "aching muscles"]),
];

/// Build the bundled synonym table in its fixed iteration order.
pub fn builtin_synonyms() -> Vec<SynonymEntry> {
    SYNONYMS
        .iter()
        .map(|(canonical, phrases)| SynonymEntry {
            canonical: canonical.to_string(),
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_thirty_one_entries() {
        assert_eq!(builtin_synonyms().len(), 31);
    }

    #[test]
    fn canonical_form_is_always_a_phrase() {
        for entry in builtin_synonyms() {
            assert!(entry.phrases.contains(&entry.canonical), "{}", entry.canonical);
        }
    }

    #[test]
    fn phrases_are_lowercase() {
        for entry in builtin_synonyms() {
            for phrase in &entry.phrases {
                assert_eq!(phrase, &phrase.to_lowercase());
            }
        }
    }
}
