use thiserror::Error;

use crate::domain::project::Project;
use crate::domain::risk::RiskTier;
use crate::services::chart_geometry::{compute_geometry, ChartGeometryError, ChartMargins};
use crate::services::risk::project_tier;

#[derive(Error, Debug)]
pub enum TrendChartError {
    #[error("project {0} has no trend history")]
    NoTrendHistory(String),
    #[error(transparent)]
    Geometry(#[from] ChartGeometryError),
}

/// Renders a project's margin trend as a standalone SVG document.
///
/// Gridlines and tick labels at every 5%, week labels along the x-axis, a
/// dashed reference line at the target margin, a gradient area fill under
/// the data line, and dots per sample, colored by the derived risk tier.
///
/// A project with no recorded history is reported as such; the chart never
/// fabricates placeholder samples.
pub fn render_trend_svg(
    project: &Project,
    width: f64,
    height: f64,
) -> Result<String, TrendChartError> {
    let trend = project
        .trend
        .as_deref()
        .filter(|series| !series.is_empty())
        .ok_or_else(|| TrendChartError::NoTrendHistory(project.id.clone()))?;

    let last_value = trend[trend.len() - 1];
    let target = project.target_margin_pct;
    let geometry = compute_geometry(
        trend,
        target.unwrap_or(last_value),
        width,
        height,
        ChartMargins::default(),
    )?;

    let color = stroke_color(project_tier(project));
    let mut lines = Vec::new();

    lines.push(format!(
        r#"<svg viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">"#
    ));
    lines.push("  <defs>".to_string());
    lines.push(r#"    <linearGradient id="areaGrad" x1="0" y1="0" x2="0" y2="1">"#.to_string());
    lines.push(format!(
        r#"      <stop offset="0%" stop-color="{color}" stop-opacity="0.18"/>"#
    ));
    lines.push(format!(
        r#"      <stop offset="100%" stop-color="{color}" stop-opacity="0.02"/>"#
    ));
    lines.push("    </linearGradient>".to_string());
    lines.push("  </defs>".to_string());

    for grid in &geometry.grid_lines {
        lines.push(format!(
            r##"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#e8e8ed" stroke-width="0.5"/>"##,
            geometry.margins.left,
            grid.y,
            geometry.plot_right(),
            grid.y
        ));
        lines.push(format!(
            r##"  <text x="{}" y="{}" text-anchor="end" fill="#86868b" font-size="11">{}%</text>"##,
            geometry.margins.left - 8.0,
            grid.y + 4.0,
            grid.value
        ));
    }

    for index in 0..geometry.samples {
        lines.push(format!(
            r##"  <text x="{}" y="{}" text-anchor="middle" fill="#86868b" font-size="11">W{}</text>"##,
            geometry.x_of(index),
            height - 4.0,
            index + 1
        ));
    }

    if target.is_some() {
        lines.push(format!(
            r##"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#86868b" stroke-width="1" stroke-dasharray="6 4"/>"##,
            geometry.margins.left,
            geometry.target_y,
            geometry.plot_right(),
            geometry.target_y
        ));
        lines.push(format!(
            r##"  <text x="{}" y="{}" text-anchor="start" fill="#86868b" font-size="10">目標</text>"##,
            geometry.plot_right() + 2.0,
            geometry.target_y + 4.0
        ));
    }

    let point_list = geometry
        .points
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ");
    let (first_x, first_y) = geometry.points[0];
    let last_index = geometry.samples - 1;
    lines.push(format!(
        r#"  <polygon points="{first_x},{first_y} {point_list} {},{bottom} {first_x},{bottom}" fill="url(#areaGrad)"/>"#,
        geometry.x_of(last_index),
        bottom = geometry.plot_bottom()
    ));
    lines.push(format!(
        r#"  <polyline points="{point_list}" fill="none" stroke="{color}" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round"/>"#
    ));

    for (x, y) in &geometry.points {
        lines.push(format!(
            r##"  <circle cx="{x}" cy="{y}" r="4" fill="{color}" stroke="#fff" stroke-width="2"/>"##
        ));
    }

    let (last_x, last_y) = geometry.points[last_index];
    lines.push(format!(
        r#"  <text x="{}" y="{}" fill="{color}" font-size="12" font-weight="600">{last_value}%</text>"#,
        last_x + 2.0,
        last_y - 8.0
    ));

    lines.push("</svg>".to_string());
    Ok(lines.join("\n"))
}

fn stroke_color(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Red => "#ff3b30",
        RiskTier::Yellow => "#ff9500",
        RiskTier::Green => "#34c759",
    }
}
