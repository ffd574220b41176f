//! Shared types: the campaign record and the immutable dataset.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marketing channel a campaign ran on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignType {
    #[serde(rename = "Social Media")]
    SocialMedia,
    Email,
    #[serde(rename = "PPC")]
    Ppc,
    Display,
}

impl CampaignType {
    /// Every label, in sampling order.
    pub const ALL: [CampaignType; 4] = [
        CampaignType::SocialMedia,
        CampaignType::Email,
        CampaignType::Ppc,
        CampaignType::Display,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SocialMedia => "Social Media",
            Self::Email => "Email",
            Self::Ppc => "PPC",
            Self::Display => "Display",
        }
    }
}

impl fmt::Display for CampaignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One synthesized campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    /// Thousands of currency units.
    pub marketing_spend: f64,
    /// Percent.
    pub conversion_rate: f64,
    pub campaign_type: CampaignType,
    pub duration_days: u32,
}

/// The synthesized table. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignDataset {
    records: Vec<CampaignRecord>,
}

impl CampaignDataset {
    pub(crate) fn new(records: Vec<CampaignRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CampaignRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn spends(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.marketing_spend).collect()
    }

    pub fn conversion_rates(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.conversion_rate).collect()
    }

    /// Serialize to JSON. Used for reproducibility checks.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_type_serializes_as_label() {
        for ct in CampaignType::ALL {
            let json = serde_json::to_string(&ct).unwrap();
            assert_eq!(json, format!("\"{}\"", ct.label()));
        }
    }

    #[test]
    fn record_json_uses_snake_case_fields() {
        let record = CampaignRecord {
            marketing_spend: 12.5,
            conversion_rate: 3.0,
            campaign_type: CampaignType::Ppc,
            duration_days: 30,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["campaign_type"], "PPC");
        assert_eq!(value["duration_days"], 30);
        assert_eq!(value["marketing_spend"], 12.5);
    }
}
