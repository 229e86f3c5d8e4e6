use super::outcome::{Outcome, interpret};
use crate::{
    Result,
    clu::{CluClient, ConversationAnalyzer},
    config::CluConfig,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Turns a question into an [`Outcome`] using one call to the analyzer.
#[derive(Clone)]
pub struct Assistant {
    analyzer: Arc<dyn ConversationAnalyzer>,
}

impl Assistant {
    pub fn new(analyzer: Arc<dyn ConversationAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub fn from_config(config: CluConfig) -> Self {
        Self::new(Arc::new(CluClient::new(config)))
    }

    pub async fn ask(&self, query: &str) -> Result<Outcome> {
        // Whitespace still goes out as typed; only an empty field is skipped
        if query.is_empty() {
            debug!("Ignoring empty query");
            return Ok(Outcome::Empty);
        }

        info!("Analyzing query of {} characters", query.chars().count());

        let reply = self.analyzer.analyze(query).await?;
        let outcome = interpret(reply);

        match &outcome {
            Outcome::Success { intent, .. } => {
                info!(
                    "Detected intent {} ({})",
                    intent.category,
                    intent.display_confidence()
                );
            }
            Outcome::NoIntent { .. } => info!("No intent above threshold"),
            Outcome::TransportError { code, .. } => {
                info!("Analysis rejected with status {}", code)
            }
            Outcome::Empty => {}
        }

        Ok(outcome)
    }
}
