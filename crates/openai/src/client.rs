use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::OpenAiError;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const IMAGE_GENERATIONS_URL: &str = "https://api.openai.com/v1/images/generations";

const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";

/// A single message in a chat completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
    quality: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    url: Option<String>,
}

/// OpenAI API client for text and image generation.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    api_key: String,
    chat_model: String,
    image_model: String,
}

impl ChatClient {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(api_key: String) -> Result<Self, OpenAiError> {
        let http = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .user_agent(concat!("siteforge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| OpenAiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_key,
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        })
    }

    /// Send a chat completion request and return the assistant text.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<String, OpenAiError> {
        let request = ChatRequest {
            model: &self.chat_model,
            messages,
            temperature: 0.7,
            max_tokens,
        };

        let res = self
            .http
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(OpenAiError::from_reqwest)?;

        let body: ChatResponse = Self::check(res).await?.json().await.map_err(|e| {
            OpenAiError::Malformed(format!("chat completion body did not parse: {e}"))
        })?;

        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| OpenAiError::Malformed("no text content in completion".to_string()))
    }

    /// Generate a single 1024x1024 image and return its URL.
    pub async fn generate_image(&self, prompt: &str) -> Result<String, OpenAiError> {
        let request = ImageRequest {
            model: &self.image_model,
            prompt,
            n: 1,
            size: "1024x1024",
            quality: "standard",
        };

        let res = self
            .http
            .post(IMAGE_GENERATIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(OpenAiError::from_reqwest)?;

        let body: ImageResponse = Self::check(res)
            .await?
            .json()
            .await
            .map_err(|e| OpenAiError::Malformed(format!("image body did not parse: {e}")))?;

        body.data
            .into_iter()
            .next()
            .and_then(|d| d.url)
            .ok_or_else(|| OpenAiError::Malformed("no image url in response".to_string()))
    }

    async fn check(res: reqwest::Response) -> Result<reqwest::Response, OpenAiError> {
        match res.status() {
            s if s.is_success() => Ok(res),
            StatusCode::UNAUTHORIZED => Err(OpenAiError::InvalidApiKey),
            s => {
                let status = s.as_u16();
                let body = res.text().await.unwrap_or_default();
                Err(OpenAiError::Http { status, body })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_models() {
        let client = ChatClient::new("sk-test".to_string()).unwrap();
        assert_eq!(client.chat_model, DEFAULT_CHAT_MODEL);
        assert_eq!(client.image_model, DEFAULT_IMAGE_MODEL);
    }

    #[test]
    fn message_constructors_set_roles() {
        assert_eq!(ChatMessage::system("a").role, "system");
        assert_eq!(ChatMessage::user("b").role, "user");
    }
}
