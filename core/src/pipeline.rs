//! The whole run, top to bottom.
//!
//! EXECUTION ORDER (fixed, no branching, no retries):
//!   1. Synthesize the dataset
//!   2. Aggregate by campaign type
//!   3. Render the bar chart in memory
//!   4. Finalize: trim, resize, write PNG
//!   5. Summarize
//!
//! Any stage failure aborts the run and propagates to the caller.

use crate::{
    aggregate::{aggregate, GroupStats},
    config::CampaignConfig,
    error::CampaignResult,
    finalizer::{finalize, FinalImage},
    renderer::render_chart,
    report::{summarize, Summary},
    synthesizer::synthesize,
    types::CampaignDataset,
};

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub dataset: CampaignDataset,
    pub groups: Vec<GroupStats>,
    pub image: FinalImage,
    pub summary: Summary,
}

pub fn run(config: &CampaignConfig) -> CampaignResult<RunOutcome> {
    let dataset = synthesize(config)?;

    let groups = aggregate(&dataset);
    log::info!("aggregate: {} campaign types", groups.len());

    let canvas = render_chart(&groups, &config.style)?;
    let image = finalize(
        canvas,
        config.output_side,
        config.trim_padding,
        &config.output_path,
    )?;

    let summary = summarize(&dataset);
    Ok(RunOutcome {
        dataset,
        groups,
        image,
        summary,
    })
}
