use crate::core::formatter;
use crate::core::prompt::INVESTMENT_NEWS_PROMPT;
use crate::core::{ConfigProvider, LoadReport, Pipeline, RawCompletion, Storage, TextDocument, TextGenerator};
use crate::utils::error::Result;

/// Fetch the news prompt, reformat the answer, write it to a text file.
pub struct NewsPipeline<G: TextGenerator, S: Storage, C: ConfigProvider> {
    generator: G,
    storage: S,
    config: C,
}

impl<G: TextGenerator, S: Storage, C: ConfigProvider> NewsPipeline<G, S, C> {
    pub fn new(generator: G, storage: S, config: C) -> Self {
        Self {
            generator,
            storage,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<G: TextGenerator, S: Storage, C: ConfigProvider> Pipeline for NewsPipeline<G, S, C> {
    async fn extract(&self) -> Result<RawCompletion> {
        tracing::debug!("Requesting completion from model {}", self.config.model());
        let completion = self.generator.generate(INVESTMENT_NEWS_PROMPT).await?;
        Ok(completion)
    }

    async fn transform(&self, raw: RawCompletion) -> Result<TextDocument> {
        let document = formatter::format_document(&raw.text);
        tracing::debug!(
            "Formatted {} lines from {} output",
            document.line_count(),
            raw.model
        );
        Ok(document)
    }

    async fn load(&self, document: TextDocument) -> Result<LoadReport> {
        let contents = document.to_file_contents();
        let file_name = self.config.output_file();

        tracing::debug!("Writing {} bytes to {}", contents.len(), file_name);
        self.storage.write_file(file_name, contents.as_bytes()).await?;

        Ok(LoadReport {
            output_path: self.storage.location(file_name),
            line_count: document.line_count(),
            bytes_written: contents.len(),
            completed_at: chrono::Utc::now(),
        })
    }
}
