use crate::domain::kpi::KpiSnapshot;
use crate::domain::project::Project;
use crate::domain::risk::RiskTier;
use crate::services::risk::classify;

/// Computes the fleet-wide KPI triple over the current snapshot.
///
/// Averages consider only projects that actually carry the field; missing
/// margins are filtered out, not treated as zero. An empty (or fully
/// unreported) fleet averages to 0.
pub fn kpi_snapshot(projects: &[Project]) -> KpiSnapshot {
    KpiSnapshot {
        avg_forecast_margin: round_tenths(mean(
            projects.iter().filter_map(|p| p.forecast_margin_pct),
        )),
        avg_target_margin: round_tenths(mean(
            projects.iter().filter_map(|p| p.target_margin_pct),
        )),
        high_risk_count: projects
            .iter()
            .filter_map(|p| p.forecast_margin_pct)
            .filter(|pct| classify(*pct) == RiskTier::Red)
            .count(),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Round half away from zero at the tenths place.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
