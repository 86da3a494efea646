//! The chatbot service: composer, session history and optional model, wired together.

use std::sync::Arc;

use haven_infer::{ReplyGenerator, Turn};
use tracing::{debug, warn};

use crate::composer::{finish_generated, plan, supportive, Plan, Reply, ReplySource};
use crate::content::SUPPORTIVE_RESPONSES;
use crate::dice::{choose, ChoiceSource};
use crate::session::SessionStore;
use crate::topics::classify_topic;

/// Answers user messages. Built once at startup and shared by all requests.
pub struct Responder {
    generator: Option<Arc<dyn ReplyGenerator>>,
    sessions: SessionStore,
    max_history_turns: usize,
}

impl Responder {
    /// Create a responder. `None` for the generator means canned responses only.
    pub fn new(generator: Option<Arc<dyn ReplyGenerator>>, max_history_turns: usize) -> Self {
        Self {
            generator,
            sessions: SessionStore::new(),
            max_history_turns,
        }
    }

    /// Responder without a model.
    pub fn rule_based() -> Self {
        Self::new(None, 0)
    }

    pub fn model_available(&self) -> bool {
        self.generator.is_some()
    }

    pub fn model_name(&self) -> Option<&str> {
        self.generator.as_deref().map(|g| g.model_name())
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Produce a reply. Never fails: model errors degrade to a supportive response.
    pub async fn respond(
        &self,
        session_id: &str,
        text: &str,
        rng: &mut dyn ChoiceSource,
    ) -> Reply {
        let topic = classify_topic(text);

        let reply = match (plan(text, topic, self.model_available(), rng), &self.generator) {
            (Plan::Reply(reply), _) => reply,
            (Plan::Generate, Some(generator)) => {
                self.generate(generator.as_ref(), session_id, text, rng).await
            }
            (Plan::Generate, None) => supportive(rng),
        };

        debug!(
            session_id,
            topic = ?topic,
            source = ?reply.source,
            "Composed reply"
        );
        reply
    }

    /// Clear a session's model context.
    pub fn reset(&self, session_id: &str) -> bool {
        self.sessions.reset(session_id)
    }

    async fn generate(
        &self,
        generator: &dyn ReplyGenerator,
        session_id: &str,
        text: &str,
        rng: &mut dyn ChoiceSource,
    ) -> Reply {
        let mut history = self.sessions.get(session_id).unwrap_or_default();
        let start = history.len().saturating_sub(self.max_history_turns);

        match generator.generate(text, &history[start..]).await {
            Ok(raw) => {
                history.push(Turn::new(text, raw.trim()));
                self.sessions.put(session_id, history);
                finish_generated(&raw, rng)
            }
            Err(e) => {
                warn!("Error generating response: {}", e);
                Reply::new(choose(rng, SUPPORTIVE_RESPONSES), ReplySource::Supportive)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use haven_core::{Error, Result};
    use parking_lot::Mutex;
    use crate::content::CRISIS_RESPONSE;
    use crate::dice::ScriptedChoices;

    /// Records the context of every call and answers with a fixed reply.
    struct RecordingGenerator {
        reply: String,
        contexts: Mutex<Vec<Vec<Turn>>>,
    }

    impl RecordingGenerator {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.into(),
                contexts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ReplyGenerator for RecordingGenerator {
        async fn generate(&self, _prompt: &str, history: &[Turn]) -> Result<String> {
            self.contexts.lock().push(history.to_vec());
            Ok(self.reply.clone())
        }

        fn model_name(&self) -> &str {
            "recording"
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl ReplyGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str, _history: &[Turn]) -> Result<String> {
            Err(Error::Inference("model exploded".into()))
        }

        fn model_name(&self) -> &str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_crisis_skips_model() {
        let generator = RecordingGenerator::new("I am a model reply.");
        let responder = Responder::new(Some(generator.clone()), 10);
        let mut rng = ScriptedChoices::new();

        let reply = responder.respond("s1", "I want to end my life", &mut rng).await;
        assert_eq!(reply.text, CRISIS_RESPONSE);
        assert!(generator.contexts.lock().is_empty());
        assert!(responder.sessions().get("s1").is_none());
    }

    #[tokio::test]
    async fn test_history_accumulates_and_resets() {
        let generator = RecordingGenerator::new("Tell me more about that.");
        let responder = Responder::new(Some(generator.clone()), 10);
        let mut rng = ScriptedChoices::new();

        responder.respond("s1", "hello there", &mut rng).await;
        let reply = responder.respond("s1", "how was your day", &mut rng).await;
        assert_eq!(reply.source, ReplySource::Generated);
        assert_eq!(reply.text, "Tell me more about that.");

        {
            let contexts = generator.contexts.lock();
            assert!(contexts[0].is_empty());
            assert_eq!(contexts[1], vec![Turn::new("hello there", "Tell me more about that.")]);
        }

        assert!(responder.reset("s1"));
        assert!(responder.sessions().get("s1").is_none());

        responder.respond("s1", "starting over", &mut rng).await;
        assert!(generator.contexts.lock()[2].is_empty());
    }

    #[tokio::test]
    async fn test_history_is_trimmed() {
        let generator = RecordingGenerator::new("Tell me more about that.");
        let responder = Responder::new(Some(generator.clone()), 2);
        let mut rng = ScriptedChoices::new();

        for msg in ["one", "two", "three", "four"] {
            responder.respond("s1", msg, &mut rng).await;
        }

        let contexts = generator.contexts.lock();
        let last = contexts.last().unwrap();
        assert_eq!(last.len(), 2);
        assert_eq!(last[0].user, "two");
        assert_eq!(last[1].user, "three");
        assert_eq!(responder.sessions().get("s1").unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_model_failure_falls_back() {
        let responder = Responder::new(Some(Arc::new(FailingGenerator)), 10);
        let mut rng = ScriptedChoices::new().with_picks(&[0]);

        let reply = responder.respond("s1", "hello", &mut rng).await;
        assert_eq!(reply.source, ReplySource::Supportive);
        assert_eq!(reply.text, SUPPORTIVE_RESPONSES[0]);
        assert!(responder.sessions().get("s1").is_none());
    }

    #[tokio::test]
    async fn test_model_failure_never_adds_follow_up() {
        let responder = Responder::new(Some(Arc::new(FailingGenerator)), 10);
        // Pick 1 has no question mark; a passing follow-up roll must not be drawn.
        let mut rng = ScriptedChoices::new().with_rolls(&[0.0]).with_picks(&[1, 0]);

        let reply = responder.respond("s1", "hello", &mut rng).await;
        assert_eq!(reply.source, ReplySource::Supportive);
        assert_eq!(reply.text, SUPPORTIVE_RESPONSES[1]);
        assert_eq!(rng.remaining_rolls(), 1);
    }

    #[tokio::test]
    async fn test_rule_based_never_stores_history() {
        let responder = Responder::rule_based();
        let mut rng = ScriptedChoices::new();
        assert!(!responder.model_available());
        assert!(responder.model_name().is_none());

        let reply = responder.respond("s1", "hello", &mut rng).await;
        assert_eq!(reply.source, ReplySource::Supportive);
        assert!(responder.sessions().is_empty());
    }
}
