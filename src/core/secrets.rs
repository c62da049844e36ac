use async_trait::async_trait;
use aws_sdk_ssm::Client as SsmClient;

use crate::errors::NotifierError;

/// Resolves an opaque parameter name into its decrypted value.
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn get_secret(&self, name: &str) -> Result<String, NotifierError>;
}

/// SSM Parameter Store backed secrets, read with decryption.
pub struct SsmSecretStore {
    client: SsmClient,
}

impl SsmSecretStore {
    #[must_use]
    pub fn new(client: SsmClient) -> Self {
        Self { client }
    }

    pub async fn from_env() -> Self {
        let shared = aws_config::from_env().load().await;
        Self::new(SsmClient::new(&shared))
    }
}

#[async_trait]
impl SecretStore for SsmSecretStore {
    async fn get_secret(&self, name: &str) -> Result<String, NotifierError> {
        let resp = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await?;

        resp.parameter()
            .and_then(|param| param.value())
            .map(str::to_string)
            .ok_or_else(|| NotifierError::AwsError(format!("ssm parameter {name} has no value")))
    }
}
