use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChatError, ChatModel, Conversation, Message};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Chat client for OpenAI-compatible `/v1/chat/completions` endpoints.
///
/// Every call is one blocking round trip: no streaming, caching or retries.
#[derive(Debug, Clone)]
pub struct OpenAiChatClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    temperature: Option<f32>,
}

impl OpenAiChatClient {
    pub fn new(endpoint: String, api_key: Option<String>, model: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            model,
            temperature: None,
        }
    }

    /// Returns a client sharing the same connection pool with another temperature.
    ///
    /// `None` leaves sampling at the provider default.
    #[must_use]
    pub fn with_temperature(&self, temperature: Option<f32>) -> Self {
        Self {
            temperature,
            ..self.clone()
        }
    }

    /// Returns a client sharing the same connection pool with another model.
    #[must_use]
    pub fn with_model(&self, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..self.clone()
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub const fn temperature(&self) -> Option<f32> {
        self.temperature
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ChatModel for OpenAiChatClient {
    async fn complete(&self, conversation: &Conversation) -> Result<String, ChatError> {
        let url = self.completions_url();

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: conversation.messages(),
            temperature: self.temperature,
        };

        debug!(
            model = %self.model,
            messages = conversation.messages().len(),
            temperature = ?self.temperature,
            "sending chat completion request"
        );

        let mut http_request = self.client.post(&url).json(&request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request.send().await.map_err(|e| ChatError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ChatError::Transport {
            url: url.clone(),
            message: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            return Err(ChatError::Transport {
                url,
                message: format!("API request failed with status {status}: {body}"),
            });
        }

        let content = parse_completion_body(&body)?;
        debug!(chars = content.chars().count(), "received chat completion");
        Ok(content)
    }
}

/// Extracts `choices[0].message.content` from a completion response body.
fn parse_completion_body(body: &str) -> Result<String, ChatError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| ChatError::MalformedResponse(format!("{e}: {body}")))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| ChatError::MalformedResponse(format!("no message content in: {body}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_completion_body_first_choice() {
        let body = r#"{"choices":[
            {"index":0,"message":{"role":"assistant","content":"Hola"}},
            {"index":1,"message":{"role":"assistant","content":"Buenas"}}
        ]}"#;
        assert_eq!(parse_completion_body(body).unwrap(), "Hola");
    }

    #[test]
    fn test_parse_completion_body_keeps_whitespace() {
        let body = r#"{"choices":[{"message":{"content":"  for i in range(3):\n    print('hi')\n"}}]}"#;
        assert_eq!(
            parse_completion_body(body).unwrap(),
            "  for i in range(3):\n    print('hi')\n"
        );
    }

    #[test]
    fn test_parse_completion_body_unicode() {
        let body = r#"{"choices":[{"message":{"content":"שלום"}}]}"#;
        assert_eq!(parse_completion_body(body).unwrap(), "שלום");
    }

    #[test]
    fn test_parse_completion_body_no_choices() {
        let err = parse_completion_body(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, ChatError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_completion_body_null_content() {
        let body = r#"{"choices":[{"message":{"content":null}}]}"#;
        assert!(matches!(
            parse_completion_body(body),
            Err(ChatError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_completion_body_not_json() {
        let err = parse_completion_body("<html>Bad Gateway</html>").unwrap_err();
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[test]
    fn test_request_omits_default_temperature() {
        let messages = vec![Message::user("hi")];
        let request = ChatCompletionRequest {
            model: "gpt-4",
            messages: &messages,
            temperature: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("temperature").is_none());
        assert_eq!(json["messages"][0]["role"], "user");

        let request = ChatCompletionRequest {
            temperature: Some(0.0),
            ..request
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["temperature"], 0.0);
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let client = OpenAiChatClient::new(
            "https://api.openai.com/".to_string(),
            None,
            "gpt-4".to_string(),
        );
        assert_eq!(
            client.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_with_temperature_and_model() {
        let client = OpenAiChatClient::new(
            "http://localhost:11434".to_string(),
            None,
            "llama3".to_string(),
        );
        let tuned = client.with_temperature(Some(0.0)).with_model("gpt-4");
        assert_eq!(tuned.temperature(), Some(0.0));
        assert_eq!(tuned.model(), "gpt-4");
        assert_eq!(client.temperature(), None);
        assert_eq!(client.model(), "llama3");
    }

    #[tokio::test]
    async fn test_complete_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let client = OpenAiChatClient::new(
            "http://127.0.0.1:9".to_string(),
            None,
            "gpt-4".to_string(),
        );
        let conversation = Conversation::single(Message::user("hi"));
        let err = client.complete(&conversation).await.unwrap_err();
        assert!(matches!(err, ChatError::Transport { .. }));
    }
}
