//! The scan command: load config, probe the base URL, print the report.

use std::time::Duration;

use crate::cli::{Cli, ReportFormat};
use crate::config::{self, model::Config};
use crate::error::ScoutError;
use crate::logging;
use crate::normalize::normalize;
use crate::probe::{self, ProbeResult};
use crate::report;
use crate::transport::{HyperTransport, Transport};

pub async fn execute(cli: Cli) -> Result<(), ScoutError> {
    let log_format = logging::resolve_format(cli.pretty, cli.json);
    logging::init(&cli.log_level, log_format);

    let base_url = normalize(&cli.base_url);
    if let Err(e) = url::Url::parse(&base_url) {
        tracing::warn!(base_url = %base_url, error = %e, "base URL does not parse, probes will fail");
    }

    // Config errors abort before any request goes out.
    let config_path = config::resolve_config_path(cli.config.as_deref())?;
    let config = config::load_config(&config_path)?;

    let transport = HyperTransport::new(cli.timeout.map(Duration::from_millis));
    let results = scan(&transport, &base_url, &config).await;

    let output = match cli.format {
        ReportFormat::Text => report::render(&results),
        ReportFormat::Json => report::render_json(&results)?,
    };
    println!("{}", output.trim_end());

    Ok(())
}

/// Probe `base_url` (already normalized) with everything `config` lists.
pub async fn scan(transport: &dyn Transport, base_url: &str, config: &Config) -> Vec<ProbeResult> {
    tracing::info!(
        base_url = %base_url,
        candidates = config.combination_count(),
        known = config.full.known.len(),
        "searching for endpoints"
    );
    probe::probe(transport, base_url, config).await
}
