pub mod assistant;
pub mod entities;
pub mod intent;
pub mod outcome;

pub use assistant::Assistant;
pub use entities::{
    EntityPresence, EntityRecord, EntitySection, entity_presence, format_entities,
};
pub use intent::{CONFIDENCE_THRESHOLD, DetectedIntent, select_best_intent};
pub use outcome::{Outcome, interpret};
