use crate::domain::model::{AnalysisInput, MergeOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// A plain-text document fetched from somewhere, one line at a time.
#[async_trait]
pub trait TextSource: Send + Sync {
    fn location(&self) -> &str;
    async fn fetch_lines(&self) -> Result<Vec<String>>;
}

/// Line-oriented prompt/response channel used by the chip ledger.
pub trait Console {
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
    fn write_line(&mut self, line: &str) -> Result<()>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<AnalysisInput>;
    async fn transform(&self, input: AnalysisInput) -> Result<MergeOutcome>;
    async fn load(&self, outcome: &MergeOutcome) -> Result<String>;
}
