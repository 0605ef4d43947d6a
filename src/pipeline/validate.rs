//! Input validation and sanitization for raw symptom text.
//!
//! Runs before any symptom processing. Rejections carry a caller-facing
//! message; pattern rejections stay generic and the matched pattern only
//! goes to the log.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Minimum input length in characters.
pub const MIN_INPUT_LENGTH: usize = 3;

/// Maximum input length in characters.
pub const MAX_INPUT_LENGTH: usize = 500;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input type")]
    InvalidType,

    #[error("Input too short. Minimum 3 characters required.")]
    TooShort,

    #[error("Input too long. Maximum 500 characters allowed.")]
    TooLong,

    #[error("Invalid characters detected in input.")]
    RejectedPattern,
}

/// A markup/script pattern that fails validation outright.
struct RejectPattern {
    source: &'static str,
    regex: Regex,
}

static REJECT_PATTERNS: LazyLock<Vec<RejectPattern>> = LazyLock::new(|| {
    [
        r"<script[^>]*>.*?</script>",
        r"javascript:",
        r"on\w+\s*=",
        r"<iframe",
        r"<object",
        r"<embed",
        r"document\.cookie",
        r"window\.location",
        r"eval\s*\(",
        r"expression\s*\(",
    ]
    .into_iter()
    .map(reject_pattern)
    .collect()
});

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid tag regex"));

fn reject_pattern(source: &'static str) -> RejectPattern {
    RejectPattern {
        source,
        regex: Regex::new(&format!("(?i){source}")).expect("Invalid reject pattern"),
    }
}

/// Validate raw input and return its sanitized form.
pub fn validate(input: &str) -> Result<String, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::InvalidType);
    }

    let length = input.chars().count();
    if length < MIN_INPUT_LENGTH {
        return Err(ValidationError::TooShort);
    }
    if length > MAX_INPUT_LENGTH {
        return Err(ValidationError::TooLong);
    }

    // Each pattern checked on its own; first hit rejects
    for pattern in REJECT_PATTERNS.iter() {
        if pattern.regex.is_match(input) {
            tracing::warn!(pattern = pattern.source, "Rejected pattern detected in input");
            return Err(ValidationError::RejectedPattern);
        }
    }

    let sanitized = sanitize(input);
    // Input made only of markup or whitespace collapses below the minimum
    if sanitized.chars().count() < MIN_INPUT_LENGTH {
        return Err(ValidationError::TooShort);
    }

    Ok(sanitized)
}

/// Strip tags, collapse whitespace, then escape `&`, `<`, `>` (ampersand first).
pub fn sanitize(input: &str) -> String {
    let stripped = HTML_TAG.replace_all(input, "");
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
