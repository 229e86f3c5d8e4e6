//! Best-intent selection over the candidates returned by the service.

use crate::clu::IntentCandidate;
use serde::Serialize;

/// Candidates must score strictly above this to be considered.
pub const CONFIDENCE_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedIntent {
    pub category: String,
    pub confidence: f64,
}

/// Picks the highest scoring candidate above [`CONFIDENCE_THRESHOLD`].
///
/// When several candidates share the top score the first one in input order
/// wins. Scores are returned untouched; `NaN` never qualifies.
pub fn select_best_intent(intents: &[IntentCandidate]) -> Option<DetectedIntent> {
    intents
        .iter()
        .filter(|candidate| candidate.confidence_score > CONFIDENCE_THRESHOLD)
        .fold(None, |best: Option<&IntentCandidate>, candidate| match best {
            Some(current) if current.confidence_score >= candidate.confidence_score => {
                Some(current)
            }
            _ => Some(candidate),
        })
        .map(|winner| DetectedIntent {
            category: winner.category.clone(),
            confidence: winner.confidence_score,
        })
}

impl DetectedIntent {
    /// Confidence as shown to the user, two decimals.
    pub fn display_confidence(&self) -> String {
        format!("{:.2}", self.confidence)
    }
}
