//! AI Polish Adapter
//!
//! Optional rewrite of note content through a generative-text service.
//! Never fails: any error or empty answer yields the original text.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::PolishConfig;
use crate::error::{BoardError, BoardResult};

/// Instruction template; `{text}` is replaced by the note content
pub const POLISH_PROMPT: &str = "Improve and polish the following note text for a digital pinboard. \
Keep it concise but make it sound more professional or engaging: \"{text}\"";

/// Text-in/text-out generation backend
#[async_trait(?Send)]
pub trait TextGenerator {
    async fn generate(&self, prompt: &str) -> BoardResult<String>;
}

/// Google Generative Language `generateContent` backend
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    http: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiGenerator {
    /// `None` when no API key is configured
    pub fn from_config(config: &PolishConfig) -> Option<Self> {
        let api_key = config.api_key.clone().filter(|k| !k.is_empty())?;
        Some(Self {
            http: Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    fn api_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    fn build_request_body(prompt: &str) -> Value {
        json!({
            "contents": [
                { "role": "user", "parts": [ { "text": prompt } ] }
            ]
        })
    }

    /// Concatenated text parts of the first candidate
    fn parse_response(body: &Value) -> Option<String> {
        let parts = body
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .as_array()?;
        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect();
        Some(text)
    }
}

#[async_trait(?Send)]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> BoardResult<String> {
        let response = self
            .http
            .post(self.api_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::build_request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::Status(status.as_u16()));
        }

        let body: Value = serde_json::from_str(&response.text().await?)?;
        Self::parse_response(&body)
            .ok_or_else(|| BoardError::Polish("response carried no candidate text".to_string()))
    }
}

pub struct PolishAdapter<G> {
    generator: Option<G>,
}

impl<G: TextGenerator> PolishAdapter<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Adapter that always hands text back unchanged
    pub fn disabled() -> Self {
        Self { generator: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.generator.is_some()
    }

    pub fn prompt_for(text: &str) -> String {
        POLISH_PROMPT.replace("{text}", text)
    }

    pub async fn polish(&self, text: &str) -> String {
        let Some(generator) = &self.generator else {
            return text.to_string();
        };
        if text.trim().is_empty() {
            return text.to_string();
        }

        match generator.generate(&Self::prompt_for(text)).await {
            Ok(improved) if !improved.trim().is_empty() => {
                debug!("[POLISH] Rewrote {} chars into {}", text.len(), improved.len());
                improved
            }
            Ok(_) => {
                warn!("[POLISH] Empty response, keeping original text");
                text.to_string()
            }
            Err(e) => {
                warn!("[POLISH] Generation failed, keeping original text: {}", e);
                text.to_string()
            }
        }
    }
}

impl PolishAdapter<GeminiGenerator> {
    pub fn from_config(config: &PolishConfig) -> Self {
        match GeminiGenerator::from_config(config) {
            Some(generator) => Self::new(generator),
            None => Self::disabled(),
        }
    }
}
