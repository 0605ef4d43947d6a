use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field} value: '{value}'")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(
    /// Urgency derived from keyword presence in the raw text.
    EmergencyLevel {
        None => "none",
        Urgent => "urgent",
        Critical => "critical",
    }
);

str_enum!(
    /// Banding derived purely from a numeric 0–100 score.
    SeverityBucket {
        Low => "low",
        Moderate => "moderate",
        High => "high",
        Critical => "critical",
    }
);

str_enum!(
    /// Severity label attached to a condition in the knowledge base.
    ConditionSeverity {
        Low => "low",
        Moderate => "moderate",
        High => "high",
        Critical => "critical",
    }
);

impl EmergencyLevel {
    pub fn is_emergency(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl SeverityBucket {
    /// Fixed disjoint ranges: low 0–25, moderate 26–50, high 51–75, critical 76–100.
    /// Scores above 100 never reach here; they are clamped by the scorer.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=25 => Self::Low,
            26..=50 => Self::Moderate,
            51..=75 => Self::High,
            _ => Self::Critical,
        }
    }
}
