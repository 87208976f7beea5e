use crate::core::{LoadReport, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// 依序執行 fetch → format → write；任一步失敗就不會寫檔
    pub async fn run(&self) -> Result<LoadReport> {
        tracing::info!("Starting news fetch");
        self.monitor.log_stats("Start");

        // Extract
        let raw = self.pipeline.extract().await?;
        tracing::info!("Fetched {} bytes from {}", raw.text.len(), raw.model);
        self.monitor.log_stats("Fetch");

        // Transform
        let document = self.pipeline.transform(raw).await?;
        tracing::info!("Formatted {} lines", document.line_count());
        self.monitor.log_stats("Format");

        // Load
        let report = self.pipeline.load(document).await?;
        tracing::info!(
            "Wrote {} bytes to {}",
            report.bytes_written,
            report.output_path
        );
        self.monitor.log_stats("Write");

        if self.monitor.is_enabled() {
            self.monitor.log_final_stats();
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RawCompletion, TextDocument};
    use crate::utils::error::EtlError;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    struct StubPipeline {
        fail_extract: bool,
        loaded: Arc<AtomicBool>,
    }

    #[async_trait::async_trait]
    impl Pipeline for StubPipeline {
        async fn extract(&self) -> Result<RawCompletion> {
            if self.fail_extract {
                return Err(EtlError::EmptyUpstreamResponse {
                    model: "stub".to_string(),
                });
            }
            Ok(RawCompletion {
                text: "**Gold**".to_string(),
                model: "stub".to_string(),
            })
        }

        async fn transform(&self, raw: RawCompletion) -> Result<TextDocument> {
            Ok(crate::core::formatter::format_document(&raw.text))
        }

        async fn load(&self, document: TextDocument) -> Result<LoadReport> {
            self.loaded.store(true, Ordering::SeqCst);
            Ok(LoadReport {
                output_path: "stub.txt".to_string(),
                line_count: document.line_count(),
                bytes_written: document.to_file_contents().len(),
                completed_at: chrono::Utc::now(),
            })
        }
    }

    #[tokio::test]
    async fn test_run_executes_all_stages() {
        let loaded = Arc::new(AtomicBool::new(false));
        let engine = EtlEngine::new(StubPipeline {
            fail_extract: false,
            loaded: loaded.clone(),
        });

        let report = engine.run().await.unwrap();

        assert!(loaded.load(Ordering::SeqCst));
        assert_eq!(report.output_path, "stub.txt");
        assert_eq!(report.line_count, 1);
        assert_eq!(report.bytes_written, "Gold:\n".len());
    }

    #[tokio::test]
    async fn test_failed_extract_skips_load() {
        let loaded = Arc::new(AtomicBool::new(false));
        let engine = EtlEngine::new_with_monitoring(
            StubPipeline {
                fail_extract: true,
                loaded: loaded.clone(),
            },
            true,
        );

        let err = engine.run().await.unwrap_err();

        assert!(matches!(err, EtlError::EmptyUpstreamResponse { .. }));
        assert!(!loaded.load(Ordering::SeqCst));
    }
}
