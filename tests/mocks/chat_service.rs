use std::sync::{Arc, Mutex};

use ytsum::{ChatMessage, ChatResponse, ChatService, Role};

#[derive(Clone)]
pub struct MockChatService {
    pub reply: String,
    pub calls: Arc<Mutex<Vec<(String, Vec<ChatMessage>)>>>,
    pub fail_with: Option<String>,
}

impl MockChatService {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            reply: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ChatService for MockChatService {
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> eyre::Result<ChatResponse> {
        self.calls.lock().unwrap().push((model.to_string(), messages.to_vec()));
        if let Some(ref msg) = self.fail_with {
            return Err(eyre::eyre!("{}", msg));
        }
        Ok(ChatResponse {
            message: ChatMessage {
                role: Role::Assistant,
                content: self.reply.clone(),
            },
        })
    }
}
