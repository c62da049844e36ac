use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Malformed stream record: {0}")]
    RecordError(String),

    #[error("Unknown notifier: {0}")]
    UnknownNotifier(String),

    #[error("Unknown summarizer: {0}")]
    UnknownSummarizer(String),

    #[error("Model response is missing the <{0}> section")]
    ExtractionError(String),

    #[error("Access denied when invoking the model: {0}")]
    AccessDeniedError(String),

    #[error("Failed to invoke the model: {0}")]
    ModelError(String),

    #[error("Failed to deliver notification: {0}")]
    DeliveryError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),
}

impl From<reqwest::Error> for NotifierError {
    fn from(error: reqwest::Error) -> Self {
        NotifierError::HttpError(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<aws_sdk_ssm::error::SdkError<E, R>> for NotifierError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(error: aws_sdk_ssm::error::SdkError<E, R>) -> Self {
        NotifierError::AwsError(aws_sdk_ssm::error::DisplayErrorContext(&error).to_string())
    }
}
