use anyhow::Context;
use clap::Parser;
use market_news_etl::config::toml_config::TomlConfig;
use market_news_etl::core::prompt::INVESTMENT_NEWS_PROMPT;
use market_news_etl::core::ConfigProvider;
use market_news_etl::utils::error::exit_with_error;
use market_news_etl::utils::{logger, validation::Validate};
use market_news_etl::{load_api_key, EtlEngine, GeminiClient, LocalStorage, NewsPipeline};
use std::path::Path;

#[derive(Parser)]
#[command(name = "toml-news")]
#[command(about = "Fetch investment news using a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "news-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Show the resolved settings and prompt without calling the API
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 設定檔決定日誌格式，所以先載入再初始化日誌
    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    logger::init_logger(args.verbose, config.json_logs());

    tracing::info!("🚀 Starting TOML-based news fetch: {}", config.pipeline.name);
    tracing::info!("📁 Configuration loaded from: {}", args.config);

    if let Err(e) = config.validate() {
        exit_with_error(&e);
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No API call will be made");
        println!("Prompt:\n{}", INVESTMENT_NEWS_PROMPT.trim());
        return Ok(());
    }

    let api_key = match load_api_key(config.env_file().map(Path::new)) {
        Ok(key) => key,
        Err(e) => exit_with_error(&e),
    };

    let generator = match GeminiClient::new(config.api_base(), config.model(), api_key) {
        Ok(client) => client,
        Err(e) => exit_with_error(&e),
    };

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_dir().to_string());
    let pipeline = NewsPipeline::new(generator, storage, config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Saved {} lines", report.line_count);
            println!("News saved successfully to {}", report.output_path);
            Ok(())
        }
        Err(e) => exit_with_error(&e),
    }
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("   Pipeline: {}", config.pipeline.name);
    if let Some(description) = &config.pipeline.description {
        tracing::info!("   Description: {}", description);
    }
    tracing::info!("   Model: {}", config.model());
    tracing::info!("   API base: {}", config.api_base());
    tracing::info!(
        "   Output: {}",
        Path::new(config.output_dir())
            .join(config.output_file())
            .display()
    );
    tracing::info!(
        "   Env file: {}",
        config.env_file().unwrap_or("(.env if present)")
    );
}
