use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Submit the prompt as a single user message and return the generated
    /// text of the first choice.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::CompletionApi(format!(
                "API returned {status}: {body}"
            )));
        }

        let body = response.json::<ChatResponse>().await?;
        body.choices
            .into_iter()
            .next()
            // Absent content is the formatter's problem, not a transport error
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| AppError::CompletionApi("Response contained no choices".to_string()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

// --- Request types ---

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

// --- Response types ---

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_chat_completions_shape() {
        let request = ChatRequest {
            model: "gpt-4-turbo".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "assess this vendor".to_string(),
            }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4-turbo",
                "messages": [{"role": "user", "content": "assess this vendor"}]
            })
        );
    }

    #[test]
    fn response_parses_first_choice_content() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{
                "message": {"role": "assistant", "content": "Assessment text"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 34}
        }))
        .unwrap();

        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("Assessment text")
        );
    }

    #[test]
    fn null_content_parses_as_absent() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{
                "message": {"role": "assistant", "content": null},
                "finish_reason": "stop"
            }]
        }))
        .unwrap();

        assert!(response.choices[0].message.content.is_none());
        assert!(response.usage.is_none());
    }
}
