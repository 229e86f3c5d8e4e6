use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

/// Request body for the `analyze-conversations` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeConversationRequest {
    pub kind: String,
    pub analysis_input: AnalysisInput,
    pub parameters: AnalysisParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub conversation_item: ConversationItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationItem {
    pub id: String,
    pub participant_id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisParameters {
    pub project_name: String,
    pub deployment_name: String,
}

impl AnalyzeConversationRequest {
    pub const KIND: &'static str = "Conversation";
    pub const ITEM_ID: &'static str = "1";
    pub const PARTICIPANT_ID: &'static str = "user";

    pub fn new(
        text: impl Into<String>,
        project_name: impl Into<String>,
        deployment_name: impl Into<String>,
    ) -> Self {
        Self {
            kind: Self::KIND.to_string(),
            analysis_input: AnalysisInput {
                conversation_item: ConversationItem {
                    id: Self::ITEM_ID.to_string(),
                    participant_id: Self::PARTICIPANT_ID.to_string(),
                    text: text.into(),
                },
            },
            parameters: AnalysisParameters {
                project_name: project_name.into(),
                deployment_name: deployment_name.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeConversationResponse {
    #[serde(default)]
    pub kind: Option<String>,
    pub result: ConversationResult,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResult {
    #[serde(default)]
    pub query: Option<String>,
    pub prediction: Prediction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_intent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_kind: Option<String>,
    /// Malformed candidates are dropped; `null` or a non-list is empty.
    #[serde(default, deserialize_with = "lenient_list")]
    pub intents: Vec<IntentCandidate>,
    /// `None` when the service omitted the field, which is distinct from an
    /// empty list even though both render the same way.
    #[serde(
        default,
        deserialize_with = "lenient_optional_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub entities: Option<Vec<Entity>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentCandidate {
    pub category: String,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub category: String,
    pub text: String,
    pub offset: u64,
    pub length: u64,
}

impl IntentCandidate {
    pub fn new(category: impl Into<String>, confidence_score: f64) -> Self {
        Self {
            category: category.into(),
            confidence_score,
        }
    }
}

impl Entity {
    pub fn new(
        category: impl Into<String>,
        text: impl Into<String>,
        offset: u64,
        length: u64,
    ) -> Self {
        Self {
            category: category.into(),
            text: text.into(),
            offset,
            length,
        }
    }
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(lenient_optional_list(deserializer)?.unwrap_or_default())
}

fn lenient_optional_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(None),
        other => {
            warn!("Ignoring prediction list of unexpected type: {}", other);
            return Ok(None);
        }
    };

    let total = items.len();
    let parsed: Vec<T> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    if parsed.len() < total {
        warn!("Skipped {} malformed prediction items", total - parsed.len());
    }

    Ok(Some(parsed))
}

/// What came back from one call to the service.
#[derive(Debug, Clone, PartialEq)]
pub enum CluReply {
    Prediction(Prediction),
    /// Any non-200 answer. The body is kept verbatim for display.
    Rejected { status: u16, body: String },
}
