use finance_assistant::{
    analysis::Assistant,
    clu::{CluReply, Entity, IntentCandidate, Prediction},
    config::CluConfig,
};
use serde_json::{Value, json};
use std::sync::Arc;

use super::mocks::MockAnalyzer;

/// CLU settings pointing at `endpoint`, with fixed test credentials
pub fn create_test_clu_config(endpoint: &str) -> CluConfig {
    CluConfig {
        endpoint: endpoint.to_string(),
        api_key: "test-api-key".to_string(),
        project_name: "finance".to_string(),
        deployment_name: "production".to_string(),
    }
}

/// Build an assistant around a mock, keeping a handle on the mock
pub fn assistant_with(mock: MockAnalyzer) -> (Assistant, Arc<MockAnalyzer>) {
    let mock = Arc::new(mock);
    (Assistant::new(mock.clone()), mock)
}

pub fn intents(pairs: &[(&str, f64)]) -> Vec<IntentCandidate> {
    pairs
        .iter()
        .map(|(category, score)| IntentCandidate::new(*category, *score))
        .collect()
}

pub fn prediction_reply(pairs: &[(&str, f64)], entities: Option<Vec<Entity>>) -> CluReply {
    CluReply::Prediction(Prediction {
        top_intent: None,
        project_kind: Some("Conversation".to_string()),
        intents: intents(pairs),
        entities,
    })
}

/// Success payload in the shape the service returns it
pub fn sample_response_body(query: &str) -> Value {
    json!({
        "kind": "ConversationResult",
        "result": {
            "query": query,
            "prediction": {
                "topIntent": "GetIncome",
                "projectKind": "Conversation",
                "intents": [
                    {"category": "GetExpenses", "confidenceScore": 0.21},
                    {"category": "GetIncome", "confidenceScore": 0.84},
                    {"category": "None", "confidenceScore": 0.05}
                ],
                "entities": [
                    {"category": "DateRange", "text": "last month", "offset": 21, "length": 10, "confidenceScore": 1}
                ]
            }
        }
    })
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
clu:
  endpoint: "https://finance.cognitiveservices.azure.com/language/:analyze-conversations?api-version=2023-04-01"
  api_key: "yaml-api-key"
  project_name: "finance"
  deployment_name: "production"

server:
  host: "127.0.0.1"
  port: 8181
  logs:
    level: "debug"
"#;

pub const PARTIAL_CONFIG_YAML: &str = r#"
clu:
  endpoint: "https://finance.cognitiveservices.azure.com/language/:analyze-conversations?api-version=2023-04-01"
  project_name: "finance"
"#;

pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
