//! Summary generation: prompt selection, model call, section extraction

pub mod extract;
pub mod prompt;

use tracing::{error, info};

use crate::ai::{InferenceParams, TextGenerator};
use crate::core::models::{SummarizerConfig, SummaryResult};
use crate::errors::NotifierError;

pub use extract::parse_summary_response;
pub use prompt::{build_system_prompt, wrap_input};

pub struct SummaryEngine {
    generator: Box<dyn TextGenerator>,
    params: InferenceParams,
}

impl SummaryEngine {
    #[must_use]
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self::with_params(generator, InferenceParams::default())
    }

    #[must_use]
    pub fn with_params(generator: Box<dyn TextGenerator>, params: InferenceParams) -> Self {
        Self { generator, params }
    }

    /// Summarize article text with the template registered for `summarizer_name`.
    ///
    /// # Errors
    ///
    /// `AccessDeniedError` and `ModelError` come straight from the generator;
    /// `ExtractionError` means the response lacked one of the three sections.
    pub async fn summarize(
        &self,
        content: &str,
        summarizer_name: &str,
        summarizer: &SummarizerConfig,
    ) -> Result<SummaryResult, NotifierError> {
        let system_prompt = build_system_prompt(summarizer_name, summarizer);

        #[cfg(feature = "debug-logs")]
        info!("Using system prompt:\n{}", system_prompt);

        info!(
            "Summarizing {} chars with summarizer {} ({})",
            content.chars().count(),
            summarizer_name,
            summarizer.output_language
        );

        let output = self
            .generator
            .generate(&system_prompt, &wrap_input(content), &self.params)
            .await?;

        parse_summary_response(&output).inspect_err(|e| {
            error!("{}; raw model output:\n{}", e, output);
        })
    }
}
