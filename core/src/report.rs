//! Descriptive statistics printed after a run.

use crate::{aggregate::mean_and_std, types::CampaignDataset};
use serde::Serialize;
use std::fmt;

pub const REPORT_TITLE: &str = "Marketing Campaign Effectiveness Analysis";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_campaigns: usize,
    /// Thousands.
    pub mean_spend: f64,
    /// Percent.
    pub mean_conversion: f64,
    /// Pearson r between spend and conversion rate. None when undefined.
    pub correlation: Option<f64>,
}

pub fn summarize(dataset: &CampaignDataset) -> Summary {
    let spends = dataset.spends();
    let rates = dataset.conversion_rates();
    Summary {
        total_campaigns: dataset.len(),
        mean_spend: mean_and_std(&spends).0,
        mean_conversion: mean_and_std(&rates).0,
        correlation: pearson(&spends, &rates),
    }
}

/// Pearson correlation coefficient. None for mismatched lengths, fewer than
/// two points, or a constant series.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let (mx, _) = mean_and_std(xs);
    let (my, _) = mean_and_std(ys);
    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        cov += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }
    let denom = (vx * vy).sqrt();
    if denom == 0.0 {
        return None;
    }
    Some(cov / denom)
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_TITLE}")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Total Campaigns: {}", self.total_campaigns)?;
        writeln!(f, "Average Marketing Spend: ${:.2}K", self.mean_spend)?;
        writeln!(f, "Average Conversion Rate: {:.2}%", self.mean_conversion)?;
        match self.correlation {
            Some(r) => write!(f, "Spend/Conversion Correlation: {r:.3}"),
            None => write!(f, "Spend/Conversion Correlation: n/a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pearson_perfect_positive_and_negative() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&xs, &up).unwrap() - 1.0).abs() < 1e-12);
        assert!((pearson(&xs, &down).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_undefined_cases() {
        assert_eq!(pearson(&[1.0], &[2.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[3.0]), None);
        assert_eq!(pearson(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]), None);
    }

    #[test]
    fn display_format_is_fixed() {
        let summary = Summary {
            total_campaigns: 120,
            mean_spend: 55.123,
            mean_conversion: 8.256,
            correlation: Some(0.81234),
        };
        let text = summary.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], REPORT_TITLE);
        assert_eq!(lines[1].len(), 50);
        assert_eq!(lines[2], "Total Campaigns: 120");
        assert_eq!(lines[3], "Average Marketing Spend: $55.12K");
        assert_eq!(lines[4], "Average Conversion Rate: 8.26%");
        assert_eq!(lines[5], "Spend/Conversion Correlation: 0.812");
    }

    #[test]
    fn display_marks_missing_correlation() {
        let summary = Summary {
            total_campaigns: 1,
            mean_spend: 10.0,
            mean_conversion: 2.0,
            correlation: None,
        };
        assert!(summary.to_string().ends_with("Correlation: n/a"));
    }
}
