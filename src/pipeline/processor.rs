//! Symptom processing: tokenization, emergency detection and
//! synonym-based symptom extraction.
//!
//! Matching is plain substring containment on the lower-cased text, not
//! whole-word matching. Short synonyms can therefore fire inside longer
//! words ("falling asleep" yields "loss of balance"). This is a known
//! limitation kept for compatibility with existing results.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::types::ProcessedInput;
use crate::knowledge::SynonymEntry;
use crate::models::EmergencyLevel;

/// Checked first. Any hit makes the input critical regardless of urgent hits.
pub const CRITICAL_KEYWORDS: &[&str] = &[
    "cant breathe",
    "cannot breathe",
    "stop breathing",
    "unconscious",
    "not breathing",
    "chest pain",
    "heart attack",
    "stroke",
    "severe bleeding",
    "choking",
    "anaphylaxis",
    "allergic reaction",
    "suicide",
    "kill myself",
];

pub const URGENT_KEYWORDS: &[&str] = &[
    "severe pain",
    "intense pain",
    "extreme pain",
    "high fever",
    "cant move",
    "paralyzed",
    "seizure",
    "convulsion",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
        "by", "i", "my", "me", "have", "has", "had", "am", "is", "are", "was", "were", "be",
        "been", "being", "this", "that", "these", "those", "very", "so", "just", "now",
        "then", "here", "there", "when", "where", "why", "how", "all", "any", "both", "each",
        "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own",
        "same", "than", "too", "can", "will", "don", "should", "what", "which", "who", "whom",
        "whose", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    ]
    .into_iter()
    .collect()
});

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("Invalid word regex"));

/// Turns sanitized free text into a `ProcessedInput`.
pub struct SymptomProcessor<'a> {
    synonyms: &'a [SynonymEntry],
}

impl<'a> SymptomProcessor<'a> {
    pub fn new(synonyms: &'a [SynonymEntry]) -> Self {
        Self { synonyms }
    }

    pub fn process(&self, input: &str) -> ProcessedInput {
        let text = input.to_lowercase();

        let processed_tokens = tokenize(&text)
            .into_iter()
            .filter(|t| !STOP_WORDS.contains(t.as_str()))
            .collect();

        let emergency_level = detect_emergency(&text);
        let extracted_symptoms = self.extract_symptoms(&text);

        ProcessedInput {
            original_input: input.to_string(),
            processed_tokens,
            symptom_count: extracted_symptoms.len(),
            extracted_symptoms,
            emergency_level,
        }
    }

    /// Canonical symptoms whose synonyms occur in `text`, in table order.
    ///
    /// `text` must already be lower-cased.
    pub fn extract_symptoms(&self, text: &str) -> Vec<String> {
        let mut extracted: Vec<String> = Vec::new();
        for entry in self.synonyms {
            // First synonym hit settles this canonical entry
            if entry.phrases.iter().any(|phrase| text.contains(phrase.as_str()))
                && !extracted.contains(&entry.canonical)
            {
                extracted.push(entry.canonical.clone());
            }
        }
        extracted
    }
}

/// Maximal runs of word characters.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Keyword tiers on the lower-cased, untokenized text. Critical wins ties.
pub fn detect_emergency(text: &str) -> EmergencyLevel {
    if CRITICAL_KEYWORDS.iter().any(|k| text.contains(k)) {
        return EmergencyLevel::Critical;
    }
    if URGENT_KEYWORDS.iter().any(|k| text.contains(k)) {
        return EmergencyLevel::Urgent;
    }
    EmergencyLevel::None
}
