//! Inline run parameters. There is no config file: `CampaignConfig::default()`
//! is the run the binary performs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub seed: u64,
    pub record_count: usize,
    /// [low, high) in thousands.
    pub spend_range: (f64, f64),
    /// [low, high) in percent; overwritten by the correlation step.
    pub initial_conversion_range: (f64, f64),
    pub conversion_slope: f64,
    pub noise_std: f64,
    /// Closed clamp interval for the correlated conversion rate.
    pub conversion_bounds: (f64, f64),
    /// [low, high] in days.
    pub duration_range: (u32, u32),
    pub output_path: PathBuf,
    pub output_side: u32,
    pub trim_padding: u32,
    pub style: ChartStyle,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            record_count: 120,
            spend_range: (10.0, 100.0),
            initial_conversion_range: (1.0, 20.0),
            conversion_slope: 0.15,
            noise_std: 2.0,
            conversion_bounds: (0.5, 25.0),
            duration_range: (7, 90),
            output_path: PathBuf::from("chart.png"),
            output_side: 512,
            trim_padding: 10,
            style: ChartStyle::default(),
        }
    }
}

impl CampaignConfig {
    /// Config with hardcoded defaults for use in tests.
    /// Same synthesis parameters, output written to `output_path`.
    pub fn default_test(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}

/// Fixed chart styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub title_font_size: u32,
    pub label_font_size: u32,
    pub tick_font_size: u32,
    /// Set2 palette, cycled per bar.
    pub palette: Vec<(u8, u8, u8)>,
    pub grid_color: (u8, u8, u8),
    pub error_bar_color: (u8, u8, u8),
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            // 8x8 inch figure at 100 DPI
            width: 800,
            height: 800,
            title: "Average Conversion Rate by Campaign Type".into(),
            x_label: "Campaign Type".into(),
            y_label: "Conversion Rate (%)".into(),
            title_font_size: 28,
            label_font_size: 24,
            tick_font_size: 18,
            palette: vec![
                (0x66, 0xc2, 0xa5),
                (0xfc, 0x8d, 0x62),
                (0x8d, 0xa0, 0xcb),
                (0xe7, 0x8a, 0xc3),
                (0xa6, 0xd8, 0x54),
                (0xff, 0xd9, 0x2f),
                (0xe5, 0xc4, 0x94),
                (0xb3, 0xb3, 0xb3),
            ],
            grid_color: (0xea, 0xea, 0xf2),
            error_bar_color: (0x42, 0x42, 0x42),
        }
    }
}
