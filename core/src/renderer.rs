//! Bar chart of mean conversion rate per campaign type, drawn onto an
//! in-memory RGB bitmap.
//!
//! Bar i is centered on x = i; the x axis spans [-0.5, n - 0.5] so every
//! bar gets an equal slot. Error bars span mean ± std_dev.

use crate::{
    aggregate::GroupStats,
    config::ChartStyle,
    error::{CampaignError, CampaignResult},
};
use image::RgbImage;
use plotters::prelude::*;

const BAR_HALF_WIDTH: f64 = 0.4;
const CAP_HALF_WIDTH: f64 = 0.1;

pub fn render_chart(groups: &[GroupStats], style: &ChartStyle) -> CampaignResult<RgbImage> {
    if groups.is_empty() {
        return Err(CampaignError::EmptyDataset);
    }
    let (width, height) = (style.width, style.height);
    let mut buffer = vec![0u8; (width as usize) * (height as usize) * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;
        draw_bars(&root, groups, style)?;
        root.present().map_err(render_err)?;
    }

    log::info!(
        "renderer: drew {} bars on {width}x{height} canvas",
        groups.len()
    );
    RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| CampaignError::Render("bitmap buffer size mismatch".into()))
}

/// Top of the y axis: 10% headroom above the tallest error bar.
pub fn y_axis_max(groups: &[GroupStats]) -> f64 {
    let top = groups.iter().map(GroupStats::upper).fold(0.0_f64, f64::max);
    (top * 1.1).max(1.0)
}

fn draw_bars<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    groups: &[GroupStats],
    style: &ChartStyle,
) -> CampaignResult<()>
where
    DB::ErrorType: 'static,
{
    let n = groups.len();
    let x_range = -0.5..(n as f64 - 0.5);
    let y_range = 0.0..y_axis_max(groups);

    let title_font = ("sans-serif", style.title_font_size as f64)
        .into_font()
        .style(FontStyle::Bold);
    let desc_font = ("sans-serif", style.label_font_size as f64)
        .into_font()
        .style(FontStyle::Bold);
    let tick_font = ("sans-serif", style.tick_font_size as f64).into_font();

    let mut chart = ChartBuilder::on(root)
        .caption(&style.title, title_font)
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_err)?;

    let label_for = |x: &f64| category_label(groups, *x);
    let (gr, gg, gb) = style.grid_color;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(RGBColor(gr, gg, gb))
        .max_light_lines(0)
        .x_labels(n)
        .x_label_formatter(&label_for)
        .y_label_formatter(&|y| format!("{y:.0}"))
        .x_desc(style.x_label.as_str())
        .y_desc(style.y_label.as_str())
        .axis_desc_style(desc_font)
        .label_style(tick_font)
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(groups.iter().enumerate().map(|(i, g)| {
            let x = i as f64;
            Rectangle::new(
                [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, g.mean)],
                bar_color(style, i).filled(),
            )
        }))
        .map_err(render_err)?;

    let (er, eg, eb) = style.error_bar_color;
    let whisker = RGBColor(er, eg, eb).stroke_width(3);
    for (i, g) in groups.iter().enumerate() {
        let x = i as f64;
        let lower = g.lower().max(0.0);
        let upper = g.upper();
        chart
            .draw_series([
                PathElement::new(vec![(x, lower), (x, upper)], whisker),
                PathElement::new(
                    vec![(x - CAP_HALF_WIDTH, upper), (x + CAP_HALF_WIDTH, upper)],
                    whisker,
                ),
                PathElement::new(
                    vec![(x - CAP_HALF_WIDTH, lower), (x + CAP_HALF_WIDTH, lower)],
                    whisker,
                ),
            ])
            .map_err(render_err)?;
    }
    Ok(())
}

/// Tick label at x: the campaign type whose bar sits there, blank otherwise.
fn category_label(groups: &[GroupStats], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    groups
        .get(idx as usize)
        .map(|g| g.campaign_type.label().to_string())
        .unwrap_or_default()
}

fn bar_color(style: &ChartStyle, index: usize) -> RGBColor {
    if style.palette.is_empty() {
        return RGBColor(0x66, 0xc2, 0xa5);
    }
    let (r, g, b) = style.palette[index % style.palette.len()];
    RGBColor(r, g, b)
}

fn render_err<E: std::fmt::Display>(e: E) -> CampaignError {
    CampaignError::Render(e.to_string())
}
