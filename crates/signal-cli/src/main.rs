//! Command-line interface for trader-signals

use anyhow::Context;
use clap::{Parser, Subcommand};
use signal_core::PipelineResult;
use signal_llm::providers::openai::OpenAiProvider;
use signal_news::providers::{GNewsProvider, NewsApiProvider};
use signal_news::{ArticleContentTool, ArticleFetcher, EntityNewsTool, NewsAggregator, NewsConfig, NewsProvider};
use signal_pipeline::{Pipeline, StageConfig, StageRunner};
use signal_server::RpcHandler;
use signal_tools::{ToolGateway, ToolRegistry};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "trader-signals")]
#[command(about = "Company analysis: related entities, news, sentiment", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a company and write its signal report
    Analyze {
        /// Company name or stock ticker
        company: String,

        /// Output file (default: trading_signals_<company>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Model to use for the stage agents
        #[arg(long, default_value = "gpt-4o")]
        model: String,
    },

    /// Serve the tool-invocation endpoint
    Serve {
        /// Address to bind the HTTP endpoint to
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: SocketAddr,

        /// Serve over stdio instead of HTTP
        #[arg(long)]
        stdio: bool,
    },
}

/// Initialize tracing subscriber with default configuration
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    match args.command {
        Command::Analyze {
            company,
            output,
            model,
        } => analyze(&company, output, model).await,
        Command::Serve { addr, stdio } => serve(addr, stdio).await,
    }
}

/// Build the tool gateway from the news configuration
fn build_gateway(config: &NewsConfig) -> anyhow::Result<ToolGateway> {
    let mut providers: Vec<Arc<dyn NewsProvider>> = Vec::new();
    if let Some(key) = &config.gnews_api_key {
        providers.push(Arc::new(GNewsProvider::new(
            key,
            config.provider_timeout,
            config.rate_limit_per_minute,
        )?));
    }
    if let Some(key) = &config.newsapi_api_key {
        providers.push(Arc::new(NewsApiProvider::new(
            key,
            config.provider_timeout,
            config.rate_limit_per_minute,
        )?));
    }
    if providers.is_empty() {
        warn!("no news provider API keys configured; every fetch will return empty");
    }

    let aggregator = Arc::new(NewsAggregator::new(providers, config));
    let fetcher = Arc::new(ArticleFetcher::new(config));

    let registry = Arc::new(ToolRegistry::new());
    registry.register(Arc::new(EntityNewsTool::new(
        aggregator,
        config.default_max_results,
    )))?;
    registry.register(Arc::new(ArticleContentTool::new(fetcher)))?;
    Ok(ToolGateway::new(registry))
}

async fn analyze(company: &str, output: Option<PathBuf>, model: String) -> anyhow::Result<()> {
    let news_config = NewsConfig::default().with_env_api_keys();
    news_config.validate()?;
    let gateway = build_gateway(&news_config)?;

    let provider = Arc::new(
        OpenAiProvider::from_env().context("model provider setup failed (is OPENAI_API_KEY set?)")?,
    );
    let stage_config = StageConfig {
        model,
        ..StageConfig::default()
    };
    let pipeline = Pipeline::new(StageRunner::new(provider, gateway, stage_config));

    info!(company, "starting analysis");
    let result = pipeline.run(company).await?;

    let path = output.unwrap_or_else(|| default_output_path(company));
    let serialized = serde_json::to_string_pretty(&result)?;
    std::fs::write(&path, serialized)
        .with_context(|| format!("failed to write {}", path.display()))?;

    print_summary(&result, &path);
    Ok(())
}

async fn serve(addr: SocketAddr, stdio: bool) -> anyhow::Result<()> {
    let news_config = NewsConfig::default().with_env_api_keys();
    news_config.validate()?;
    let handler = Arc::new(RpcHandler::new(build_gateway(&news_config)?));

    if stdio {
        signal_server::stdio::serve(handler).await?;
    } else {
        signal_server::http::serve(handler, addr).await?;
    }
    Ok(())
}

/// `trading_signals_<company>.json`, lowercased with spaces as underscores
fn default_output_path(company: &str) -> PathBuf {
    let slug: String = company
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    PathBuf::from(format!("trading_signals_{slug}.json"))
}

fn print_summary(result: &PipelineResult, path: &std::path::Path) {
    println!("Analysis for {}", result.company_name);
    println!(
        "  {} related entities, {} articles, {} sentiment tokens",
        result.entities.len(),
        result.article_count(),
        result.token_count()
    );
    for report in &result.entities {
        println!(
            "  - {} ({}, strength {:.2}): {} articles, {} tokens",
            report.entity.entity_name,
            report.entity.relationship_type.as_str(),
            report.entity.relationship_strength,
            report.articles.len(),
            report.sentiment_tokens.len()
        );
        for token in report.sentiment_tokens.iter().take(3) {
            println!(
                "      \"{}\" ({:?}/{:?}, {:.2})",
                token.token_text, token.impact, token.direction, token.strength
            );
        }
    }
    println!("Report written to {}", path.display());
}
