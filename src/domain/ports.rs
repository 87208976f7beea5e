use crate::domain::model::{LoadReport, RawCompletion, TextDocument};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// 檔案在此儲存體中的完整位置，用於回報輸出路徑
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn model(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn output_file(&self) -> &str;
}

/// Upstream text generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<RawCompletion>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<RawCompletion>;
    async fn transform(&self, raw: RawCompletion) -> Result<TextDocument>;
    async fn load(&self, document: TextDocument) -> Result<LoadReport>;
}
