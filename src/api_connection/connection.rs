use async_trait::async_trait;
use reqwest::Client;
use std::error::Error;
use std::fmt;
use tracing::debug;

use super::endpoints::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, JsonSchemaDefinition,
    ResponseFormat,
};
use crate::completion::CompletionPort;
use crate::config::{ConfigError, GeneratorConfig};

const MAX_COMPLETION_TOKENS: u32 = 8192;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug)]
pub enum ApiConnectionError {
    NetworkError(reqwest::Error),
    SerializationError(serde_json::Error),
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
    /// The provider answered 2xx but without any completion text.
    EmptyResponse,
    /// Transport-level failure described only by text (used by non-HTTP ports).
    Unavailable(String),
}

impl fmt::Display for ApiConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiConnectionError::NetworkError(err) => write!(f, "Network error: {}", err),
            ApiConnectionError::SerializationError(err) => {
                write!(f, "Serialization error: {}", err)
            }
            ApiConnectionError::ApiError { status, error_body } => {
                write!(f, "API error {}: {}", status, error_body)
            }
            ApiConnectionError::EmptyResponse => write!(f, "API returned no completion"),
            ApiConnectionError::Unavailable(reason) => {
                write!(f, "Completion service unavailable: {}", reason)
            }
        }
    }
}

impl Error for ApiConnectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiConnectionError::NetworkError(err) => Some(err),
            ApiConnectionError::SerializationError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiConnectionError {
    fn from(err: reqwest::Error) -> Self {
        ApiConnectionError::NetworkError(err)
    }
}

impl From<serde_json::Error> for ApiConnectionError {
    fn from(err: serde_json::Error) -> Self {
        ApiConnectionError::SerializationError(err)
    }
}

#[derive(Clone)]
pub enum Provider {
    OpenRouter {
        api_key: String,
        base_url: String,
        site_url: String,
        app_name: String,
        client: Client,
    },
}

// Hand-written so the API key never ends up in logs.
impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::OpenRouter { base_url, .. } => f
                .debug_struct("OpenRouter")
                .field("base_url", base_url)
                .finish_non_exhaustive(),
        }
    }
}

impl Provider {
    pub fn openrouter(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        let api_key = config.require_api_key()?.to_string();
        Ok(Self::OpenRouter {
            api_key,
            base_url: config.base_url.clone(),
            site_url: config.site_url.clone(),
            app_name: config.app_name.clone(),
            client: Client::new(),
        })
    }

    pub async fn call_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ApiConnectionError> {
        match self {
            Provider::OpenRouter {
                api_key,
                base_url,
                site_url,
                app_name,
                client,
            } => {
                let url = format!("{}/chat/completions", base_url);
                debug!(%url, model = %request.model, "sending chat completion request");

                let response = client
                    .post(&url)
                    .bearer_auth(api_key)
                    .header("HTTP-Referer", site_url)
                    .header("X-Title", app_name)
                    .json(request)
                    .send()
                    .await?;

                if response.status().is_success() {
                    // Decoded separately so a bad body is not reported as a transport failure.
                    let body = response.text().await?;
                    let chat_response = serde_json::from_str::<ChatCompletionResponse>(&body)?;
                    Ok(chat_response)
                } else {
                    let status = response.status();
                    let error_body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Failed to read error body".to_string());
                    Err(ApiConnectionError::ApiError { status, error_body })
                }
            }
        }
    }
}

/// Single-turn request carrying the prompt and a strict `json_schema` response format.
pub fn build_chat_request(
    model: &str,
    prompt: &str,
    schema: &JsonSchemaDefinition,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        response_format: Some(ResponseFormat {
            format_type: "json_schema".to_string(),
            json_schema: Some(schema.clone()),
        }),
        temperature: Some(TEMPERATURE),
        max_tokens: Some(MAX_COMPLETION_TOKENS),
    }
}

/// Text of the first choice. Missing or blank content is an empty response.
pub fn completion_text(response: ChatCompletionResponse) -> Result<String, ApiConnectionError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(ApiConnectionError::EmptyResponse)
}

#[async_trait]
impl CompletionPort for Provider {
    async fn complete(
        &self,
        model: &str,
        prompt: &str,
        schema: &JsonSchemaDefinition,
    ) -> Result<String, ApiConnectionError> {
        let request = build_chat_request(model, prompt, schema);
        let response = self.call_chat_completion(&request).await?;
        if let Some(usage) = &response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = ?usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "chat completion usage"
            );
        }
        completion_text(response)
    }

    fn provider_name(&self) -> &'static str {
        match self {
            Provider::OpenRouter { .. } => "openrouter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::recipe_list_schema;

    fn response_with(content: Option<&str>) -> ChatCompletionResponse {
        let body = serde_json::json!({
            "id": "gen-1",
            "model": "google/gemini-2.5-flash",
            "choices": [{ "message": { "role": "assistant", "content": content }, "index": 0 }]
        });
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_chat_request_carries_prompt_and_schema() {
        let schema = recipe_list_schema();
        let request = build_chat_request("google/gemini-2.5-flash", "make soup", &schema);
        let payload = serde_json::to_value(&request).unwrap();

        assert_eq!(payload["model"], "google/gemini-2.5-flash");
        assert_eq!(payload["messages"][0]["role"], "user");
        assert_eq!(payload["messages"][0]["content"], "make soup");
        assert_eq!(payload["response_format"]["type"], "json_schema");
        assert_eq!(payload["response_format"]["json_schema"]["strict"], true);
        assert_eq!(payload["response_format"]["json_schema"]["schema"]["type"], "array");
    }

    #[test]
    fn test_completion_text_takes_first_choice() {
        let text = completion_text(response_with(Some("[]"))).unwrap();
        assert_eq!(text, "[]");
    }

    #[test]
    fn test_blank_or_null_content_is_empty_response() {
        assert!(matches!(
            completion_text(response_with(None)),
            Err(ApiConnectionError::EmptyResponse)
        ));
        assert!(matches!(
            completion_text(response_with(Some("  \n"))),
            Err(ApiConnectionError::EmptyResponse)
        ));
    }

    #[test]
    fn test_openrouter_requires_api_key() {
        let config = GeneratorConfig::from_lookup(|_| None);
        assert!(matches!(
            Provider::openrouter(&config),
            Err(ConfigError::MissingApiKey(_))
        ));
    }

    #[test]
    fn test_debug_output_hides_api_key() {
        let config = GeneratorConfig::from_lookup(|name| {
            (name == "OPENROUTER_API_KEY").then(|| "sk-secret".to_string())
        });
        let provider = Provider::openrouter(&config).unwrap();
        let rendered = format!("{:?}", provider);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("openrouter.ai"));
    }
}
