//! Response composition.
//!
//! Composition is split around the model call: `plan` handles everything that
//! can be answered from canned content, `finish_generated` decorates whatever
//! the model produced. Every random decision goes through a `ChoiceSource`,
//! and a roll is only drawn when its gate is actually reached.

use serde::Serialize;

use crate::content::{
    topic_templates, CLARIFICATION_REQUESTS, CRISIS_RESPONSE, EMOJIS, EMOTIONAL_EXPRESSIONS,
    FOLLOW_UP_QUESTIONS, GROUNDING_TECHNIQUES, GROUNDING_TRIGGERS, OFFENSIVE_RESPONSE,
    SUPPORTIVE_RESPONSES,
};
use crate::dice::{choose, ChoiceSource};
use crate::safety::{screen, SafetyFlag};
use crate::topics::Topic;

/// Chance of answering a detected topic with one of its templates.
pub const P_TOPIC_TEMPLATE: f64 = 0.8;
/// Chance of offering a grounding technique for anxious requests.
pub const P_GROUNDING: f64 = 0.6;
/// Chance of adding a follow-up to a supportive response.
pub const P_SUPPORTIVE_FOLLOW_UP: f64 = 0.5;
/// Chance of prefixing a model reply with an emotional expression.
pub const P_EMOTION: f64 = 0.4;
/// Chance (inside the emotion branch) of adding a follow-up to a model reply.
pub const P_MODEL_FOLLOW_UP: f64 = 0.4;
/// Chance of ending a model reply with an emoji.
pub const P_EMOJI: f64 = 0.2;

/// Minimum number of words for a model reply to be used.
pub const MIN_REPLY_WORDS: usize = 3;

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Offensive,
    Crisis,
    Topic(Topic),
    Grounding,
    Supportive,
    Generated,
    Clarification,
}

/// A composed reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

impl Reply {
    pub(crate) fn new(text: impl Into<String>, source: ReplySource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }
}

/// Outcome of the canned-content stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Final answer, no model needed.
    Reply(Reply),
    /// Ask the model, then call `finish_generated`.
    Generate,
}

/// Run the canned-content stages for a message.
pub fn plan(
    text: &str,
    topic: Option<Topic>,
    model_available: bool,
    rng: &mut dyn ChoiceSource,
) -> Plan {
    match screen(text) {
        Some(SafetyFlag::Offensive) => {
            return Plan::Reply(Reply::new(OFFENSIVE_RESPONSE, ReplySource::Offensive))
        }
        Some(SafetyFlag::Crisis) => {
            return Plan::Reply(Reply::new(CRISIS_RESPONSE, ReplySource::Crisis))
        }
        None => {}
    }

    if let Some(topic) = topic {
        if rng.roll() < P_TOPIC_TEMPLATE {
            let template = choose(rng, topic_templates(topic));
            return Plan::Reply(Reply::new(template, ReplySource::Topic(topic)));
        }
    }

    if topic == Some(Topic::Anxiety) && wants_grounding(text) && rng.roll() < P_GROUNDING {
        let technique = choose(rng, GROUNDING_TECHNIQUES);
        return Plan::Reply(Reply::new(technique, ReplySource::Grounding));
    }

    if !model_available {
        return Plan::Reply(supportive(rng));
    }

    Plan::Generate
}

/// A supportive response, with an occasional follow-up question.
pub fn supportive(rng: &mut dyn ChoiceSource) -> Reply {
    let response = choose(rng, SUPPORTIVE_RESPONSES);
    if !response.contains('?') && rng.roll() < P_SUPPORTIVE_FOLLOW_UP {
        let follow_up = choose(rng, FOLLOW_UP_QUESTIONS);
        return Reply::new(format!("{} {}", response, follow_up), ReplySource::Supportive);
    }
    Reply::new(response, ReplySource::Supportive)
}

/// Turn a raw model reply into the final answer.
pub fn finish_generated(raw: &str, rng: &mut dyn ChoiceSource) -> Reply {
    let raw = raw.trim();
    if raw.split_whitespace().count() < MIN_REPLY_WORDS {
        return Reply::new(
            choose(rng, CLARIFICATION_REQUESTS),
            ReplySource::Clarification,
        );
    }

    let mut response = raw.to_string();

    if rng.roll() < P_EMOTION {
        let (_, phrases) = EMOTIONAL_EXPRESSIONS[rng.pick(EMOTIONAL_EXPRESSIONS.len())];
        let emotion = choose(rng, phrases);
        response = format!("{}. {}", emotion, response);

        if !response.trim_end().ends_with('?') && rng.roll() < P_MODEL_FOLLOW_UP {
            response = format!("{} {}", response, choose(rng, FOLLOW_UP_QUESTIONS));
        }
    }

    if rng.roll() < P_EMOJI {
        response = format!("{} {}", response, choose(rng, EMOJIS));
    }

    Reply::new(response, ReplySource::Generated)
}

fn wants_grounding(text: &str) -> bool {
    let lowered = text.to_lowercase();
    GROUNDING_TRIGGERS.iter().any(|t| lowered.contains(t))
}
