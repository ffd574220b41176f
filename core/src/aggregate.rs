//! Group-by over campaign type: mean and spread of conversion rate.

use crate::types::{CampaignDataset, CampaignType};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub campaign_type: CampaignType,
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation (ddof = 0).
    pub std_dev: f64,
}

impl GroupStats {
    pub fn lower(&self) -> f64 {
        self.mean - self.std_dev
    }

    pub fn upper(&self) -> f64 {
        self.mean + self.std_dev
    }
}

/// One entry per campaign type present, in first-encountered order.
pub fn aggregate(dataset: &CampaignDataset) -> Vec<GroupStats> {
    let mut order: Vec<CampaignType> = Vec::new();
    let mut values: Vec<Vec<f64>> = Vec::new();

    for record in dataset.records() {
        let idx = match order.iter().position(|t| *t == record.campaign_type) {
            Some(i) => i,
            None => {
                order.push(record.campaign_type);
                values.push(Vec::new());
                order.len() - 1
            }
        };
        values[idx].push(record.conversion_rate);
    }

    order
        .into_iter()
        .zip(values)
        .map(|(campaign_type, rates)| {
            let (mean, std_dev) = mean_and_std(&rates);
            log::debug!(
                "aggregate: {campaign_type} n={} mean={mean:.3} sd={std_dev:.3}",
                rates.len()
            );
            GroupStats {
                campaign_type,
                count: rates.len(),
                mean,
                std_dev,
            }
        })
        .collect()
}

/// Mean and population standard deviation. Empty input yields (0, 0).
pub fn mean_and_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}
