//! Shared application state.

use std::sync::Arc;

use haven_chat::{Reply, Responder, RngSource};
use haven_core::{HavenConfig, Result};
use haven_infer::ReplyGenerator;

use crate::pages::Pages;
use crate::transcript::TranscriptLogger;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: HavenConfig,
    pub responder: Responder,
    pub transcripts: TranscriptLogger,
    pub pages: Pages,
}

impl AppState {
    pub fn new(config: HavenConfig, generator: Option<Arc<dyn ReplyGenerator>>) -> Result<Self> {
        let responder = Responder::new(generator, config.model.max_history_turns);
        let transcripts = TranscriptLogger::new(&config.data_paths);
        let pages = Pages::new()?;

        Ok(Self {
            config,
            responder,
            transcripts,
            pages,
        })
    }

    /// Answer a message for a session and log the exchange.
    pub async fn converse(&self, session_id: &str, message: &str) -> Reply {
        let mut rng = RngSource::from_entropy();
        let reply = self.responder.respond(session_id, message, &mut rng).await;

        let timestamp = chrono::Utc::now().to_rfc3339();
        self.transcripts
            .log(session_id, &timestamp, message, &reply.text);

        reply
    }
}

#[cfg(test)]
pub fn test_state(
    dir: &std::path::Path,
    generator: Option<Arc<dyn ReplyGenerator>>,
) -> Arc<AppState> {
    let config = HavenConfig::from_lookup(dir, |key| match key {
        "SECRET_KEY" => Some("test-secret".to_string()),
        _ => None,
    })
    .unwrap();
    Arc::new(AppState::new(config, generator).unwrap())
}
