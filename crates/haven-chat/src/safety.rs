//! Safety screening: offensive language and crisis language.
//!
//! Both checks are best-effort keyword filters, not classifiers. Anything
//! outside the listed patterns and phrases goes undetected, including
//! misspellings, spacing tricks and paraphrases of self-harm.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::content::{CRISIS_KEYWORDS, OFFENSIVE_PATTERNS};

/// Which safety check fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyFlag {
    Offensive,
    Crisis,
}

// Compiled once, reused.
static OFFENSIVE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    OFFENSIVE_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("offensive pattern must compile"))
        .collect()
});

/// True if the lowercased text matches any offensive pattern.
pub fn is_offensive(text: &str) -> bool {
    let lowered = text.to_lowercase();
    OFFENSIVE_RES.iter().any(|re| re.is_match(&lowered))
}

/// True if the lowercased text contains any crisis phrase.
pub fn has_crisis_language(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CRISIS_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// First safety flag in precedence order: offensive, then crisis.
pub fn screen(text: &str) -> Option<SafetyFlag> {
    if is_offensive(text) {
        Some(SafetyFlag::Offensive)
    } else if has_crisis_language(text) {
        Some(SafetyFlag::Crisis)
    } else {
        None
    }
}
