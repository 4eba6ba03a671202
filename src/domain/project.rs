use serde::{Deserialize, Serialize};

/// One contributing cost driver behind a project's risk, e.g.
/// "duct install labor" / "+11%".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub label: String,
    pub value: String,
}

/// A construction/engineering project as served by the backing store.
///
/// Margin percentages and the trend history are optional because the hosted
/// table may not carry them for every row; the reporting functions filter
/// or degrade rather than fail on missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client: Option<String>,
    pub contract_amount: Option<i64>,
    pub target_margin_pct: Option<f64>,
    pub forecast_margin_pct: Option<f64>,
    pub risk_reason: Option<String>,
    #[serde(default)]
    pub risk_factors: Vec<RiskFactor>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    pub trend: Option<Vec<f64>>,
    pub estimated_hours: Option<f64>,
    pub actual_hours: Option<f64>,
}
