use async_trait::async_trait;
use finance_assistant::{
    Error, Result,
    clu::{CluReply, ConversationAnalyzer},
};
use std::sync::{Arc, Mutex};

/// Mock analyzer for testing
#[derive(Debug)]
pub struct MockAnalyzer {
    pub replies: Arc<Mutex<Vec<CluReply>>>,
    pub queries: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockAnalyzer {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            queries: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_replies(self, replies: Vec<CluReply>) -> Self {
        *self.replies.lock().unwrap() = replies;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConversationAnalyzer for MockAnalyzer {
    async fn analyze(&self, query: &str) -> Result<CluReply> {
        self.queries.lock().unwrap().push(query.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::clu(error.clone()));
        }

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::clu("No more mock replies available"));
        }

        Ok(replies.remove(0))
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
