//! Supportive small-talk responder.
//!
//! Messages are screened for offensive and crisis language, classified into a
//! mental-health topic by keyword, and answered from canned content. When a
//! dialogue model is configured it handles everything the canned content
//! does not, with session history for context.

pub mod composer;
pub mod content;
pub mod dice;
pub mod responder;
pub mod safety;
pub mod session;
pub mod topics;

pub use composer::{Reply, ReplySource};
pub use dice::{ChoiceSource, RngSource, ScriptedChoices};
pub use responder::Responder;
pub use safety::{has_crisis_language, is_offensive, SafetyFlag};
pub use session::SessionStore;
pub use topics::{classify_topic, Topic};
