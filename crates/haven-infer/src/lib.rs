//! Haven Infer — adapter around an external dialogue-generation model.
//!
//! Provides the `ReplyGenerator` trait. `HttpGenerator` talks to any
//! OpenAI-compatible chat-completions endpoint. When no endpoint is
//! configured, or it cannot be set up, `create_generator` returns `None`
//! and the chatbot runs on canned responses only.

pub mod generator;
pub mod http_generator;

pub use generator::{strip_special_tokens, ReplyGenerator, Turn};
pub use http_generator::HttpGenerator;

use std::sync::Arc;

use haven_core::ModelSettings;

/// Create the configured generator, or `None` for rule-based mode.
pub fn create_generator(settings: &ModelSettings) -> Option<Arc<dyn ReplyGenerator>> {
    if settings.api_url.is_none() {
        tracing::info!("No model endpoint configured. Using rule-based responses only.");
        return None;
    }

    match HttpGenerator::new(settings) {
        Ok(generator) => {
            tracing::info!("Using model {} at {}", generator.model_name(), generator.endpoint());
            Some(Arc::new(generator))
        }
        Err(e) => {
            tracing::error!("Error loading model: {}", e);
            tracing::info!("Continuing with rule-based responses only");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_endpoint_means_rule_based() {
        assert!(create_generator(&ModelSettings::default()).is_none());
    }

    #[test]
    fn test_bad_endpoint_degrades() {
        let settings = ModelSettings {
            api_url: Some("not a url".into()),
            ..ModelSettings::default()
        };
        assert!(create_generator(&settings).is_none());
    }

    #[test]
    fn test_valid_endpoint_loads() {
        let settings = ModelSettings {
            api_url: Some("http://127.0.0.1:8000/v1".into()),
            ..ModelSettings::default()
        };
        let generator = create_generator(&settings).unwrap();
        assert_eq!(generator.model_name(), haven_core::config::DEFAULT_MODEL);
    }
}
