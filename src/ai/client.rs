//! Amazon Bedrock client module
//!
//! Wraps the Converse API for one-shot summarization calls.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::Region;
use aws_config::retry::RetryConfig;
use aws_config::sts::AssumeRoleProvider;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::operation::converse::ConverseOutput as ConverseResponse;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use aws_smithy_types::Document;
use tracing::{debug, error, info};

use super::{InferenceParams, TextGenerator};
use crate::core::config::AppConfig;
use crate::errors::NotifierError;

/// Attempts made by the SDK's standard retry mode before giving up.
const MAX_ATTEMPTS: u32 = 10;

/// Session name recorded in CloudTrail for assumed-role model calls.
pub const ASSUME_ROLE_SESSION_NAME: &str = "notify-to-app-bedrock";

const ACCESS_DENIED_GUIDANCE: &str = "To troubleshoot this issue please refer to the following resources:\n\
    https://docs.aws.amazon.com/IAM/latest/UserGuide/troubleshoot_access-denied.html\n\
    https://docs.aws.amazon.com/bedrock/latest/userguide/security-iam.html";

pub struct BedrockClient {
    client: Client,
    model_id: String,
}

impl BedrockClient {
    #[must_use]
    pub fn new(client: Client, model_id: String) -> Self {
        Self { client, model_id }
    }

    /// Build a runtime client pinned to the model's region.
    ///
    /// When `bedrock_assume_role` is set the client signs with credentials from
    /// STS `AssumeRole` on that role instead of the function's own role.
    pub async fn from_config(config: &AppConfig) -> Self {
        info!(
            "Creating Bedrock runtime client in region {}",
            config.model_region
        );
        let region = Region::new(config.model_region.clone());
        let mut loader = aws_config::from_env()
            .region(region.clone())
            .retry_config(RetryConfig::standard().with_max_attempts(MAX_ATTEMPTS));

        if let Some(role) = &config.bedrock_assume_role {
            info!("Using role: {}", role);
            let base = aws_config::from_env().region(region).load().await;
            let provider = AssumeRoleProvider::builder(role.clone())
                .session_name(ASSUME_ROLE_SESSION_NAME)
                .configure(&base)
                .build()
                .await;
            loader = loader.credentials_provider(provider);
        }

        let shared = loader.load().await;
        Self::new(Client::new(&shared), config.model_id.clone())
    }
}

#[async_trait]
impl TextGenerator for BedrockClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
        params: &InferenceParams,
    ) -> Result<String, NotifierError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(user_message.to_string()))
            .build()
            .map_err(|e| NotifierError::ModelError(format!("Invalid message: {e}")))?;

        let inference = InferenceConfiguration::builder()
            .max_tokens(params.max_tokens)
            .temperature(params.temperature)
            .top_p(params.top_p)
            .build();

        let mut request = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(system_prompt.to_string()))
            .messages(message)
            .inference_config(inference);

        if let Some(effort) = &params.reasoning_effort {
            request = request.additional_model_request_fields(Document::Object(HashMap::from([(
                "reasoning_effort".to_string(),
                Document::String(effort.clone()),
            )])));
        }

        info!("Invoking model {}", self.model_id);
        let response = request.send().await.map_err(|e| {
            let service_error = e.into_service_error();
            if service_error.is_access_denied_exception() {
                let detail = DisplayErrorContext(&service_error).to_string();
                error!("{detail}\n{ACCESS_DENIED_GUIDANCE}");
                NotifierError::AccessDeniedError(detail)
            } else {
                NotifierError::ModelError(DisplayErrorContext(&service_error).to_string())
            }
        })?;

        let text = first_text_block(&response).ok_or_else(|| {
            NotifierError::ModelError("Model response contained no text".to_string())
        })?;
        debug!("Model output:\n{}", text);
        Ok(text)
    }
}

/// Reasoning models put a reasoning block ahead of the answer, so skip anything that is not text.
fn first_text_block(response: &ConverseResponse) -> Option<String> {
    let message = response.output()?.as_message().ok()?;
    message
        .content()
        .iter()
        .find_map(|block| block.as_text().ok())
        .cloned()
}
