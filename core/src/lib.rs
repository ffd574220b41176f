//! Synthetic marketing-campaign data, a conversion-rate bar chart, and a
//! printed summary.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod finalizer;
pub mod pipeline;
pub mod renderer;
pub mod report;
pub mod rng;
pub mod synthesizer;
pub mod types;

pub use config::{CampaignConfig, ChartStyle};
pub use error::{CampaignError, CampaignResult};
pub use pipeline::{run, RunOutcome};
