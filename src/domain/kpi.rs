use serde::Serialize;

/// Fleet-wide KPI triple computed on demand from the current snapshot.
/// Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiSnapshot {
    pub avg_forecast_margin: f64,
    pub avg_target_margin: f64,
    pub high_risk_count: usize,
}
