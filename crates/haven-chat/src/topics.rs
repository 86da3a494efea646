//! Keyword-based topic classification.

use serde::{Deserialize, Serialize};

use crate::content::TOPIC_KEYWORDS;

/// Mental-health themes the responder has dedicated templates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Anxiety,
    Depression,
    Stress,
    Loneliness,
    Grief,
}

impl Topic {
    /// All topics in classification precedence order.
    #[cfg(test)]
    pub fn all() -> &'static [Topic] {
        &[
            Self::Anxiety,
            Self::Depression,
            Self::Stress,
            Self::Loneliness,
            Self::Grief,
        ]
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topic::Anxiety => write!(f, "anxiety"),
            Topic::Depression => write!(f, "depression"),
            Topic::Stress => write!(f, "stress"),
            Topic::Loneliness => write!(f, "loneliness"),
            Topic::Grief => write!(f, "grief"),
        }
    }
}

/// Return the first topic whose keywords occur in the text.
///
/// Plain substring containment, so "sad" also matches "saddle".
pub fn classify_topic(text: &str) -> Option<Topic> {
    let lowered = text.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(topic, _)| *topic)
}
