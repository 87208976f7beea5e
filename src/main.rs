use clap::Parser;
use market_news_etl::utils::error::exit_with_error;
use market_news_etl::utils::{logger, validation::Validate};
use market_news_etl::{load_api_key, CliConfig, EtlEngine, GeminiClient, LocalStorage, NewsPipeline};
use std::path::Path;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting market-news");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with_error(&e);
    }

    // 缺少金鑰時直接結束，不會產生任何輸出檔
    let api_key = match load_api_key(config.env_file.as_deref().map(Path::new)) {
        Ok(key) => key,
        Err(e) => exit_with_error(&e),
    };

    let generator = match GeminiClient::new(&config.api_base, &config.model, api_key) {
        Ok(client) => client,
        Err(e) => exit_with_error(&e),
    };

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_dir.clone());
    let pipeline = NewsPipeline::new(generator, storage, config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "✅ Saved {} lines at {}",
                report.line_count,
                report.completed_at.to_rfc3339()
            );
            println!("News saved successfully to {}", report.output_path);
        }
        Err(e) => exit_with_error(&e),
    }
}
