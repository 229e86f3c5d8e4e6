use super::entities::{EntityPresence, EntitySection, entity_presence, format_entities};
use super::intent::{DetectedIntent, select_best_intent};
use crate::clu::CluReply;
use serde::Serialize;

/// Everything the presentation layer needs to show for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Success {
        intent: DetectedIntent,
        entities: EntitySection,
        entity_presence: EntityPresence,
    },
    NoIntent {
        entities: EntitySection,
        entity_presence: EntityPresence,
    },
    /// The service answered with a non-200 status `code`.
    TransportError {
        code: u16,
        body: String,
    },
    /// Nothing was asked, so nothing was sent.
    Empty,
}

pub fn interpret(reply: CluReply) -> Outcome {
    let prediction = match reply {
        CluReply::Rejected { status, body } => {
            return Outcome::TransportError { code: status, body };
        }
        CluReply::Prediction(prediction) => prediction,
    };

    let entities = prediction.entities.as_deref();
    let presence = entity_presence(entities);
    let section = format_entities(entities);

    match select_best_intent(&prediction.intents) {
        Some(intent) => Outcome::Success {
            intent,
            entities: section,
            entity_presence: presence,
        },
        None => Outcome::NoIntent {
            entities: section,
            entity_presence: presence,
        },
    }
}

impl Outcome {
    pub fn entities(&self) -> Option<&EntitySection> {
        match self {
            Self::Success { entities, .. } | Self::NoIntent { entities, .. } => Some(entities),
            Self::TransportError { .. } | Self::Empty => None,
        }
    }
}
