use super::types::*;
use crate::{Error, Result, config::CluConfig};
use async_trait::async_trait;
use reqwest::{StatusCode, header::CONTENT_TYPE};
use tracing::{debug, warn};

pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

#[async_trait]
pub trait ConversationAnalyzer: Send + Sync {
    async fn analyze(&self, query: &str) -> Result<CluReply>;
}

pub struct CluClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    project_name: String,
    deployment_name: String,
}

impl CluClient {
    pub fn new(config: CluConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    pub fn with_http_client(http: reqwest::Client, config: CluConfig) -> Self {
        Self {
            http,
            endpoint: config.endpoint,
            api_key: config.api_key,
            project_name: config.project_name,
            deployment_name: config.deployment_name,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_request(&self, query: &str) -> AnalyzeConversationRequest {
        AnalyzeConversationRequest::new(query, &self.project_name, &self.deployment_name)
    }
}

#[async_trait]
impl ConversationAnalyzer for CluClient {
    async fn analyze(&self, query: &str) -> Result<CluReply> {
        let body = self.build_request(query);

        debug!(
            "Sending conversation analysis for project {} / deployment {}",
            self.project_name, self.deployment_name
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status != StatusCode::OK {
            warn!("CLU service answered with status {}", status.as_u16());
            return Ok(CluReply::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: AnalyzeConversationResponse = serde_json::from_str(&text)
            .map_err(|e| Error::clu(format!("Failed to decode analysis result: {}", e)))?;

        let prediction = parsed.result.prediction;
        debug!(
            "Received prediction with {} intents and {} entities",
            prediction.intents.len(),
            prediction.entities.as_ref().map_or(0, Vec::len)
        );

        Ok(CluReply::Prediction(prediction))
    }
}
