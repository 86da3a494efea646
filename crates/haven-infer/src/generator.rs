//! Reply generator trait and shared helpers.

use async_trait::async_trait;
use haven_core::Result;
use serde::{Deserialize, Serialize};

/// One exchange of a conversation, oldest first in a history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub bot: String,
}

impl Turn {
    pub fn new(user: impl Into<String>, bot: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            bot: bot.into(),
        }
    }
}

/// Trait for dialogue model backends.
///
/// The model is a black box: given the new user message and the prior turns
/// of the session, return the raw decoded reply.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Generate a reply to `prompt` in the context of `history`.
    async fn generate(&self, prompt: &str, history: &[Turn]) -> Result<String>;

    /// Identifier of the underlying model.
    fn model_name(&self) -> &str;
}

/// Special tokens some dialogue models leak into decoded output.
const SPECIAL_TOKENS: &[&str] = &["<|endoftext|>", "<|eot_id|>", "<|im_end|>", "<s>", "</s>", "<pad>"];

/// Remove special tokens and surrounding whitespace from decoded model text.
pub fn strip_special_tokens(text: &str) -> String {
    let mut cleaned = text.to_string();
    for token in SPECIAL_TOKENS {
        cleaned = cleaned.replace(token, "");
    }
    cleaned.trim().to_string()
}
