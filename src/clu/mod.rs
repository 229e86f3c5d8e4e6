pub mod client;
pub mod types;

pub use client::{CluClient, ConversationAnalyzer, SUBSCRIPTION_KEY_HEADER};
pub use types::*;
