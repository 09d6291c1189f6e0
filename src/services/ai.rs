use crate::domain::models::{HealthMetrics, SuggestionBundle, Task};
use crate::services::{fallback, prompt};
use anyhow::{anyhow, Result};
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageContent,
    CreateChatCompletionRequestArgs, Role,
};
use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use std::sync::Arc;

/// Anything that turns a prompt into free-text guidance.
#[async_trait]
pub trait InsightModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

pub struct OpenAiModel {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiModel {
    pub fn new(api_key: String, model: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Client::with_config(config),
            model,
        }
    }
}

#[async_trait]
impl InsightModel for OpenAiModel {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                role: Role::System,
                content: prompt::SYSTEM_PROMPT.to_string(),
                name: None,
            }),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                role: Role::User,
                content: ChatCompletionRequestUserMessageContent::Text(prompt.to_string()),
                name: None,
            }),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(messages)
            .temperature(0.4)
            .build()?;

        let resp = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| anyhow!("OpenAI error: {e}"))?;

        resp.choices
            .first()
            .and_then(|c| c.message.content.clone())
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| anyhow!("OpenAI returned an empty completion"))
    }
}

/// Either the model's own text or the rule-based bundle, with the reason the
/// model was skipped when it failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Insight {
    Model(String),
    Fallback {
        suggestions: SuggestionBundle,
        reason: Option<String>,
    },
}

#[derive(Clone)]
pub struct AiService {
    model: Option<Arc<dyn InsightModel>>,
}

impl AiService {
    pub fn new(model: Option<Arc<dyn InsightModel>>) -> Self {
        Self { model }
    }

    pub fn openai(api_key: Option<String>, model: String) -> Self {
        let model = api_key
            .map(|key| Arc::new(OpenAiModel::new(key, model)) as Arc<dyn InsightModel>);
        Self::new(model)
    }

    pub fn is_live(&self) -> bool {
        self.model.is_some()
    }

    /// One model attempt at most. Never fails: any problem ends in the fallback.
    pub async fn insight(&self, tasks: &[Task], health: &HealthMetrics) -> Insight {
        let Some(model) = &self.model else {
            tracing::debug!("No model credential configured, using fallback suggestions");
            return Insight::Fallback {
                suggestions: fallback::generate_suggestions(tasks, health, None),
                reason: None,
            };
        };

        let prompt = prompt::build_prompt(tasks, health);
        match model.complete(&prompt).await {
            Ok(content) => {
                tracing::info!("Model insight generated ({} chars)", content.len());
                Insight::Model(content)
            }
            Err(err) => {
                let reason = err.to_string();
                tracing::warn!("Model insight failed, falling back: {}", reason);
                Insight::Fallback {
                    suggestions: fallback::generate_suggestions(tasks, health, Some(&reason)),
                    reason: Some(reason),
                }
            }
        }
    }
}
