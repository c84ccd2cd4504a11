pub mod crawlers;
pub mod error;
pub mod models;
pub mod publishers;
pub mod services;
pub mod traits;

use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::crawlers::LsrCrawler;
use crate::error::Result;
use crate::models::types::HarvestStats;
use crate::publishers::FileReportWriter;
use crate::services::harvester::Harvester;
use crate::services::settings::{AppConfig, load_config};

pub use crate::error::HarvestError;

/// Initialize structured logging on stderr (default to info if RUST_LOG not set).
pub fn init_logging() {
    let log_spec = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_spec))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// High-level entrypoint: load config (or defaults), init logging, run one harvest
pub async fn run_with_config_path(path: Option<&Path>) -> Result<HarvestStats> {
    let cfg = match path {
        Some(p) => load_config(p)?,
        None => AppConfig::default(),
    };
    init_logging();
    run_harvest(cfg).await
}

/// One full pass: list, truncate the output, then fetch, filter and write.
pub async fn run_harvest(cfg: AppConfig) -> Result<HarvestStats> {
    info!(
        list_url = %cfg.api.list_url,
        output = %cfg.output.file_path,
        poll_delay_ms = cfg.harvest.poll_delay_ms,
        "harvest starting"
    );

    let mut writer = FileReportWriter::builder()
        .path(&cfg.output.file_path)
        .create_dirs(cfg.output.create_dirs)
        .build();

    let crawler = LsrCrawler::builder()
        .list_url(cfg.api.list_url.clone())
        .user_agent(cfg.api.user_agent.clone())
        .timeout(Duration::from_secs(cfg.api.request_timeout_secs))
        .summary_marker(cfg.harvest.summary_marker.clone())
        .build()?;

    Harvester::builder()
        .lister(&crawler)
        .fetcher(&crawler)
        .sink(&mut writer)
        .poll_delay(Duration::from_millis(cfg.harvest.poll_delay_ms))
        .build()
        .run()
        .await
}
