use serde::{Deserialize, Serialize};

/// Discrete risk tier derived from a project's forecast margin.
///
/// Always computed, never stored: a severity string persisted by a backend
/// is treated as a display hint only. The derive order makes `Red` sort
/// before `Yellow` before `Green`, so the tier doubles as a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Red,
    Yellow,
    Green,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Red => "red",
            RiskTier::Yellow => "yellow",
            RiskTier::Green => "green",
        }
    }
}
