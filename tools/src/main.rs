//! campaign-chart: synthesize campaigns, chart conversion by campaign type,
//! write chart.png, print the summary.
//!
//! Usage:
//!   campaign-chart
//!   RUST_LOG=debug campaign-chart

use anyhow::{Context, Result};
use campaign_core::{pipeline, CampaignConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = CampaignConfig::default();
    log::debug!("config: {}", serde_json::to_string(&config)?);

    let outcome = pipeline::run(&config)
        .with_context(|| format!("campaign run failed (seed={})", config.seed))?;

    println!("{}", outcome.summary);
    log::info!(
        "chart: {} ({}x{}, {} bars)",
        outcome.image.path.display(),
        outcome.image.width,
        outcome.image.height,
        outcome.groups.len()
    );
    Ok(())
}
